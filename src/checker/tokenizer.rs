// Word scanner: splits text into candidate words with exact byte offsets.
//
// Works on extended grapheme clusters so combining marks stay attached to
// their base letter. Abbreviations ("e.g.", "i.e.", "x.y.z.") are recognized
// by shape, not by a list of known abbreviations.
//
// Dot policy:
// - a dot joins the token when the segment before it is at most
//   MAX_ABBREVIATION_SEGMENT graphemes and a word grapheme follows, except
//   that an uppercase follower only joins after a one-grapheme segment
//   ("U.S.A" joins, "it.Then" splits);
// - a trailing dot is kept only if the token already has an internal dot
//   and its last segment is abbreviation-sized ("e.g." keeps it,
//   "e.g.abcde." does not).

use crate::Position;
use unicode_segmentation::UnicodeSegmentation;

/// Longest segment (in graphemes) that may sit in front of an abbreviation dot.
pub const MAX_ABBREVIATION_SEGMENT: usize = 4;

/// One appearance of a word in the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence<'a> {
    pub word: &'a str,
    pub from: usize,
    pub to: usize,
}

impl Occurrence<'_> {
    pub fn position(&self) -> Position {
        Position::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    InWord,
    SeenDot,
    SeenJoiner,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Word,
    Dot,
    Joiner,
    Other,
}

impl Class {
    fn of(grapheme: &str) -> Self {
        match grapheme.chars().next() {
            Some('.') => Class::Dot,
            Some('\'' | '\u{2019}' | '-') => Class::Joiner,
            Some(c) if c.is_alphanumeric() => Class::Word,
            _ => Class::Other,
        }
    }
}

struct Scanner<'a> {
    text: &'a str,
    state: State,
    start: usize,
    end: usize,
    dot_end: usize,
    segment_len: usize,
    dotted: bool,
    has_alpha: bool,
    out: Vec<Occurrence<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            state: State::Idle,
            start: 0,
            end: 0,
            dot_end: 0,
            segment_len: 0,
            dotted: false,
            has_alpha: false,
            out: Vec::new(),
        }
    }

    fn feed(&mut self, at: usize, grapheme: &str) {
        let class = Class::of(grapheme);

        match (self.state, class) {
            (State::Idle, Class::Word) => self.begin(at, grapheme),
            (State::Idle, _) => {}

            (State::InWord, Class::Word) => self.extend(at, grapheme),
            (State::InWord, Class::Dot) => {
                self.dot_end = at + grapheme.len();
                self.state = State::SeenDot;
            }
            (State::InWord, Class::Joiner) => self.state = State::SeenJoiner,
            (State::InWord, Class::Other) => self.finish(),

            // The joiner is swallowed by moving `end` past it.
            (State::SeenJoiner, Class::Word) => self.extend(at, grapheme),
            (State::SeenJoiner, _) => {
                self.finish();
                self.feed(at, grapheme);
            }

            (State::SeenDot, Class::Word) if self.joins_after_dot(grapheme) => {
                self.dotted = true;
                self.segment_len = 0;
                self.extend(at, grapheme);
            }
            (State::SeenDot, Class::Word) => {
                self.finish();
                self.begin(at, grapheme);
            }
            (State::SeenDot, _) => {
                self.finish();
                self.feed(at, grapheme);
            }
        }
    }

    fn joins_after_dot(&self, next: &str) -> bool {
        let uppercase = next.chars().next().is_some_and(char::is_uppercase);
        self.segment_len <= MAX_ABBREVIATION_SEGMENT && (!uppercase || self.segment_len == 1)
    }

    fn begin(&mut self, at: usize, grapheme: &str) {
        self.start = at;
        self.segment_len = 0;
        self.dotted = false;
        self.has_alpha = false;
        self.extend(at, grapheme);
    }

    fn extend(&mut self, at: usize, grapheme: &str) {
        self.end = at + grapheme.len();
        self.segment_len += 1;
        self.has_alpha |= grapheme.chars().any(char::is_alphabetic);
        self.state = State::InWord;
    }

    /// Close the current token. A pending trailing dot belongs to the token
    /// only when the token is already an abbreviation ending in a short segment.
    fn finish(&mut self) {
        if self.state == State::SeenDot
            && self.dotted
            && self.segment_len <= MAX_ABBREVIATION_SEGMENT
        {
            self.end = self.dot_end;
        }

        if self.state != State::Idle && self.has_alpha {
            self.out.push(Occurrence {
                word: &self.text[self.start..self.end],
                from: self.start,
                to: self.end,
            });
        }

        self.state = State::Idle;
    }
}

/// Scan `text` into word occurrences, in text order.
///
/// Every occurrence satisfies `&text[from..to] == word`. Tokens without any
/// alphabetic character (plain numbers) are dropped.
pub fn scan(text: &str) -> Vec<Occurrence<'_>> {
    let mut scanner = Scanner::new(text);

    for (at, grapheme) in text.grapheme_indices(true) {
        scanner.feed(at, grapheme);
    }
    scanner.finish();

    scanner.out
}
