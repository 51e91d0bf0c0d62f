//! English tokenizer producing a [`LinguisticNode`] tree.
//!
//! The split is lossless: every byte of the input lands in exactly one
//! terminal, in order. Paragraph gaps and inter-sentence whitespace are kept
//! as `Other` terminals one level up, outside the units they separate.

use super::LinguisticNode;
use unicode_segmentation::UnicodeSegmentation;

const TERMINALS: &[char] = &['.', '!', '?', '…'];
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '}', '»'];
const HYPHENS: &[&str] = &["-", "‐"];

// Titles and short forms whose full stop never closes a sentence, even
// before a capitalised word ("Dr. Smith", "Elm St. North").
const ABBREVIATIONS: &[&str] = &[
    "capt", "col", "dr", "gen", "gov", "jr", "lt", "messrs", "mr", "mrs", "ms", "mt", "prof",
    "rep", "rev", "sen", "sgt", "sr", "st", "vs",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenKind {
    Word,
    Space,
    Punct,
}

#[derive(Debug, Clone, Copy)]
struct Token {
    kind: TokenKind,
    start: usize,
    end: usize,
}

impl Token {
    fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.start..self.end]
    }

    fn node(&self, src: &str) -> LinguisticNode {
        match self.kind {
            TokenKind::Word => LinguisticNode::word(self.text(src)),
            TokenKind::Space | TokenKind::Punct => LinguisticNode::other(self.text(src)),
        }
    }
}

enum Piece<'a> {
    Gap(&'a str),
    Body(&'a str),
}

/// Parses raw text into Document → Paragraph → Sentence → Word/Other.
pub fn parse(text: &str) -> LinguisticNode {
    let children = split_paragraphs(text)
        .into_iter()
        .map(|piece| match piece {
            Piece::Gap(ws) => LinguisticNode::other(ws),
            Piece::Body(body) => parse_paragraph(body),
        })
        .collect();
    LinguisticNode::document(children)
}

fn whitespace_runs(text: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut start = None;
    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if start.is_none() {
                start = Some(idx);
            }
        } else if let Some(s) = start.take() {
            runs.push((s, idx));
        }
    }
    if let Some(s) = start {
        runs.push((s, text.len()));
    }
    runs
}

// A gap is whitespace at either edge of the document, or any run holding a
// blank line.
fn split_paragraphs(text: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut cursor = 0;

    for (start, end) in whitespace_runs(text) {
        let run = &text[start..end];
        let is_gap = start == 0 || end == text.len() || run.matches('\n').count() >= 2;
        if !is_gap {
            continue;
        }
        if start > cursor {
            pieces.push(Piece::Body(&text[cursor..start]));
        }
        pieces.push(Piece::Gap(run));
        cursor = end;
    }

    if cursor < text.len() {
        pieces.push(Piece::Body(&text[cursor..]));
    }
    pieces
}

fn classify(segment: &str) -> TokenKind {
    if segment.chars().any(char::is_alphanumeric) {
        TokenKind::Word
    } else if segment.chars().all(char::is_whitespace) {
        TokenKind::Space
    } else {
        TokenKind::Punct
    }
}

fn tokenize(body: &str) -> Vec<Token> {
    let mut tokens: Vec<Token> = Vec::new();

    for (start, segment) in body.split_word_bound_indices() {
        let token = Token {
            kind: classify(segment),
            start,
            end: start + segment.len(),
        };

        // Word, hyphen, word -> one word ("wine-bottle").
        if token.kind == TokenKind::Word && tokens.len() >= 2 {
            let hyphen = tokens[tokens.len() - 1];
            let head = tokens[tokens.len() - 2];
            if head.kind == TokenKind::Word && HYPHENS.contains(&hyphen.text(body)) {
                tokens.truncate(tokens.len() - 2);
                tokens.push(Token {
                    kind: TokenKind::Word,
                    start: head.start,
                    end: token.end,
                });
                continue;
            }
        }
        tokens.push(token);
    }
    tokens
}

fn is_terminal(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| TERMINALS.contains(&c))
}

fn is_closer(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| CLOSERS.contains(&c))
}

// A lone full stop straight after a known abbreviation.
fn is_abbreviation(tokens: &[Token], dot: usize, body: &str) -> bool {
    if dot == 0 || tokens[dot].text(body) != "." {
        return false;
    }
    let prev = tokens[dot - 1];
    prev.kind == TokenKind::Word
        && ABBREVIATIONS
            .iter()
            .any(|a| prev.text(body).eq_ignore_ascii_case(a))
}

// A terminal mark closes the sentence when followed by the end of the
// paragraph, or by whitespace and then something other than a lower-case
// word (which would indicate an abbreviation such as "e.g.").
fn ends_sentence(tokens: &[Token], next: usize, body: &str) -> bool {
    match tokens.get(next) {
        None => true,
        Some(t) if t.kind != TokenKind::Space => false,
        Some(_) => {
            let following = tokens[next..].iter().find(|t| t.kind != TokenKind::Space);
            !matches!(following, Some(t) if t.kind == TokenKind::Word
                && t.text(body).chars().next().is_some_and(char::is_lowercase))
        }
    }
}

fn parse_paragraph(body: &str) -> LinguisticNode {
    let tokens = tokenize(body);
    let mut children = Vec::new();
    let mut sentence: Vec<LinguisticNode> = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        i += 1;

        if sentence.is_empty() && token.kind == TokenKind::Space {
            children.push(token.node(body));
            continue;
        }
        sentence.push(token.node(body));

        if token.kind == TokenKind::Punct && is_terminal(token.text(body)) {
            let mark = i - 1;
            while let Some(t) = tokens.get(i) {
                let text = t.text(body);
                if t.kind != TokenKind::Punct || !(is_terminal(text) || is_closer(text)) {
                    break;
                }
                sentence.push(t.node(body));
                i += 1;
            }
            let abbreviated = i == mark + 1 && is_abbreviation(&tokens, mark, body);
            if !abbreviated && ends_sentence(&tokens, i, body) {
                children.push(LinguisticNode::sentence(std::mem::take(&mut sentence)));
            }
        }
    }

    if !sentence.is_empty() {
        children.push(LinguisticNode::sentence(sentence));
    }
    LinguisticNode::paragraph(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::NodeKind;

    fn kinds(node: &LinguisticNode) -> Vec<NodeKind> {
        node.children().iter().map(|c| c.kind()).collect()
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let tree = parse("One here.\n\nTwo there.");
        assert_eq!(
            kinds(&tree),
            vec![NodeKind::Paragraph, NodeKind::Other, NodeKind::Paragraph]
        );
        assert_eq!(tree.children()[1].value(), Some("\n\n"));
    }

    #[test]
    fn test_single_newline_stays_in_paragraph() {
        let tree = parse("Look at me!\nLook at me NOW!");
        assert_eq!(kinds(&tree), vec![NodeKind::Paragraph]);
        let para = &tree.children()[0];
        assert_eq!(
            kinds(para),
            vec![NodeKind::Sentence, NodeKind::Other, NodeKind::Sentence]
        );
    }

    #[test]
    fn test_abbreviation_does_not_split() {
        let tree = parse("Use a list, e.g. in tables. Then stop.");
        assert_eq!(tree.sentence_count(), 2);
    }

    #[test]
    fn test_title_keeps_sentence_together() {
        let tree = parse("We asked Prof. Lee. She agreed.");
        assert_eq!(tree.sentence_count(), 2);
        let para = &tree.children()[0];
        assert_eq!(para.children()[0].text(), "We asked Prof. Lee.");
    }

    #[test]
    fn test_hyphenated_word_is_single_word() {
        let tree = parse("The neck of a wine-bottle.");
        let words: Vec<&str> = tree.words().collect();
        assert_eq!(words, vec!["The", "neck", "of", "a", "wine-bottle"]);
    }

    #[test]
    fn test_closing_quote_stays_with_sentence() {
        let tree = parse("He said “Did you have any fun?” Then left.");
        let para = &tree.children()[0];
        assert_eq!(para.children()[0].text(), "He said “Did you have any fun?”");
        assert_eq!(tree.sentence_count(), 2);
    }

    #[test]
    fn test_edges_are_document_level_gaps() {
        let text = "  \n Hello there.\n";
        let tree = parse(text);
        assert_eq!(
            kinds(&tree),
            vec![NodeKind::Other, NodeKind::Paragraph, NodeKind::Other]
        );
        assert_eq!(tree.text(), text);
    }

    #[test]
    fn test_empty_input() {
        let tree = parse("");
        assert!(tree.children().is_empty());
        assert!(tree.validate().is_ok());
    }
}
