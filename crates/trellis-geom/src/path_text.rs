//! The textual path grammar: `M x,y`, `L x,y`, `Q cx,cy,x,y`, `C c1x,c1y,c2x,c2y,x,y` and `Z`.
//!
//! Whitespace may appear between any two tokens, and a single comma may separate the numbers of a
//! command. Numbers are `-?digits(.digits)?((e|E)[+-]?digits)?`.
//!
//! Scanning is all-or-nothing: when any token is malformed the scanner rewinds to where the path
//! started and reports failure, so the caller can retry with another grammar.

use crate::error::{Error, Result};
use crate::path::{BezierPath, PathElement};
use crate::vector::Vector2D;
use std::fmt;
use std::str::FromStr;

/// Saved scanner position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// A rewindable cursor over the characters of a string.
#[derive(Debug, Clone)]
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    failed_at: Option<usize>,
}

impl Scanner {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            failed_at: None,
        }
    }

    /// Current position, counted in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Character position of the token that made the most recent scan fail.
    pub fn failed_at(&self) -> Option<usize> {
        self.failed_at
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.pos)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.0;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    pub fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    pub fn rest(&self) -> String {
        self.chars[self.pos.min(self.chars.len())..].iter().collect()
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is the next character.
    pub fn scan_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn scan_digits(&mut self, out: &mut String) -> bool {
        let start = self.pos;
        while let Some(c) = self.peek().filter(char::is_ascii_digit) {
            out.push(c);
            self.pos += 1;
        }
        self.pos > start
    }

    /// Consumes a decimal number. On failure nothing is consumed.
    pub fn scan_double(&mut self) -> Option<f64> {
        let start = self.checkpoint();
        let mut literal = String::new();
        if self.scan_char('-') {
            literal.push('-');
        }
        if !self.scan_digits(&mut literal) {
            self.restore(start);
            return None;
        }
        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.bump();
            literal.push('.');
            self.scan_digits(&mut literal);
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            let exponent_start = self.checkpoint();
            let exponent_len = literal.len();
            self.bump();
            literal.push('e');
            if let Some(sign) = self.peek().filter(|c| *c == '+' || *c == '-') {
                self.bump();
                literal.push(sign);
            }
            if !self.scan_digits(&mut literal) {
                self.restore(exponent_start);
                literal.truncate(exponent_len);
            }
        }
        match literal.parse::<f64>() {
            Ok(v) => Some(v),
            Err(_) => {
                self.restore(start);
                None
            }
        }
    }

    fn fail(&mut self) {
        self.failed_at = Some(self.pos);
    }

    /// Scans `N` numbers separated by whitespace and at most one comma each.
    fn scan_numbers<const N: usize>(&mut self) -> Option<[f64; N]> {
        let mut out = [0.0; N];
        for (i, slot) in out.iter_mut().enumerate() {
            self.skip_whitespace();
            if i > 0 && self.scan_char(',') {
                self.skip_whitespace();
            }
            match self.scan_double() {
                Some(v) => *slot = v,
                None => {
                    self.fail();
                    return None;
                }
            }
        }
        Some(out)
    }

    fn scan_point(&mut self) -> Option<Vector2D> {
        let [x, y] = self.scan_numbers::<2>()?;
        Some(Vector2D::new(x, y))
    }

    fn scan_element(&mut self) -> Option<PathElement> {
        let command = self.peek()?;
        let element = match command {
            'M' => {
                self.bump();
                PathElement::MoveTo(self.scan_point()?)
            }
            'L' => {
                self.bump();
                PathElement::LineTo(self.scan_point()?)
            }
            'Q' => {
                self.bump();
                let [cx, cy, x, y] = self.scan_numbers::<4>()?;
                PathElement::QuadCurveTo {
                    control: Vector2D::new(cx, cy),
                    end: Vector2D::new(x, y),
                }
            }
            'C' => {
                self.bump();
                let [c1x, c1y, c2x, c2y, x, y] = self.scan_numbers::<6>()?;
                PathElement::CurveTo {
                    control1: Vector2D::new(c1x, c1y),
                    control2: Vector2D::new(c2x, c2y),
                    end: Vector2D::new(x, y),
                }
            }
            'Z' => {
                self.bump();
                PathElement::ClosePath
            }
            _ => {
                self.fail();
                return None;
            }
        };
        Some(element)
    }
}

/// Scans path elements up to the end of input.
///
/// Returns `None` on an unknown command or a parameter count mismatch; the scanner is then back at
/// the position it had before the call.
pub fn scan_bezier_path_elements(scanner: &mut Scanner) -> Option<Vec<PathElement>> {
    let start = scanner.checkpoint();
    let mut elements = Vec::new();
    loop {
        scanner.skip_whitespace();
        if scanner.is_at_end() {
            break;
        }
        match scanner.scan_element() {
            Some(element) => elements.push(element),
            None => {
                tracing::debug!(
                    failed_at = ?scanner.failed_at(),
                    parsed = elements.len(),
                    "path data rejected; rewinding scanner"
                );
                scanner.restore(start);
                return None;
            }
        }
    }
    Some(elements)
}

pub fn parse_path_elements(data: &str) -> Option<Vec<PathElement>> {
    scan_bezier_path_elements(&mut Scanner::new(data))
}

impl FromStr for BezierPath {
    type Err = Error;

    fn from_str(data: &str) -> Result<Self> {
        let mut scanner = Scanner::new(data);
        if let Some(elements) = scan_bezier_path_elements(&mut scanner) {
            return Ok(BezierPath::from_elements(elements));
        }
        // SVG commands outside this grammar get a precise error instead of a generic one.
        let offending = scanner
            .failed_at()
            .and_then(|pos| data.chars().nth(pos))
            .filter(|c| "AHVSTamlhvcsqtz".contains(*c));
        Err(match offending {
            Some(c) => Error::Unsupported {
                feature: format!("path command '{c}'"),
            },
            None => Error::InvalidPathData {
                data: data.to_string(),
            },
        })
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, buf: &mut ryu_js::Buffer, mut v: f64) -> fmt::Result {
    if !v.is_finite() {
        return f.write_str("0");
    }
    if v == -0.0 {
        v = 0.0;
    }
    f.write_str(buf.format_finite(v))
}

fn write_command(
    f: &mut fmt::Formatter<'_>,
    buf: &mut ryu_js::Buffer,
    command: char,
    points: &[Vector2D],
) -> fmt::Result {
    write!(f, "{command}")?;
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write_number(f, buf, p.x)?;
        f.write_str(",")?;
        write_number(f, buf, p.y)?;
    }
    Ok(())
}

fn write_element(
    f: &mut fmt::Formatter<'_>,
    buf: &mut ryu_js::Buffer,
    element: &PathElement,
) -> fmt::Result {
    match *element {
        PathElement::MoveTo(p) => write_command(f, buf, 'M', &[p]),
        PathElement::LineTo(p) => write_command(f, buf, 'L', &[p]),
        PathElement::QuadCurveTo { control, end } => write_command(f, buf, 'Q', &[control, end]),
        PathElement::CurveTo {
            control1,
            control2,
            end,
        } => write_command(f, buf, 'C', &[control1, control2, end]),
        PathElement::ClosePath => f.write_str("Z"),
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, &mut ryu_js::Buffer::new(), self)
    }
}

/// Formats as path data, e.g. `M10,20 L30,40 Z`; `FromStr` reads the same text back.
impl fmt::Display for BezierPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = ryu_js::Buffer::new();
        for (i, element) in self.elements().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write_element(f, &mut buf, element)?;
        }
        Ok(())
    }
}
