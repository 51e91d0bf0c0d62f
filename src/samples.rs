//! Built-in sample texts.

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

const DEFINITION: &str = r#"People have defined readability in various ways, e.g., in: The Literacy Dictionary, Jeanne Chall and Edgar Dale, G. Harry McLaughlin, William DuBay.

Easy reading helps learning and enjoyment, so what we write should be easy to understand.

While many writers and speakers since ancient times have used plain language, the 20th century brought more focus to reading ease. Much research has focused on matching prose to reading skills. This has used many successful formulas: in research, government, teaching, publishing, the military, medicine, and business. Many people in many languages have been helped by this.

By the year 2000, there were over 1,000 studies on readability formulas in professional journals about their validity and merit. The study of reading is not just in teaching. Research has shown that much money is wasted by companies in making texts hard for the average reader to read.

There are summaries of this research; see the links in this section. Many textbooks on reading include pointers to readability."#;

const FAREWELL: &str = r#"On Tuesday, January 10, I’ll go home to Chicago to say my grateful farewell to you, even if you can’t be there in person.

I’m just beginning to write my remarks. But I’m thinking about them as a chance to say thank you for this amazing journey, to celebrate the ways you’ve changed this country for the better these past eight years, and to offer some thoughts on where we all go from here.
Since 2009, we’ve faced our fair share of challenges, and come through them stronger. That’s because we have never let go of a belief that has guided us ever since our founding — our conviction that, together, we can change this country for the better. So I hope you’ll join me one last time."#;

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum Sample {
    // Wikipedia, CC BY-SA.
    Definition,
    // U.S. government work.
    Farewell,
}

impl Sample {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Definition => "Readability: Definition, Wikipedia",
            Self::Farewell => "Obama, Farewell Speech",
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            Self::Definition => DEFINITION,
            Self::Farewell => FAREWELL,
        }
    }

    /// Body followed by an attribution line.
    pub fn text(&self) -> String {
        format!("{}\n\n— {}", self.body(), self.title())
    }
}

pub fn all_samples() -> Vec<Sample> {
    Sample::iter().collect()
}
