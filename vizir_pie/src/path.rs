// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact SVG path-data assembly.
//!
//! Commands are written as a lowercase letter glued to its first operand, with single spaces
//! between every other token (`m10 0 a10 10 0 0 1 -20 0 l10 0 z`). Every number is rounded
//! with [`round_to`] before it is formatted, so identical inputs give byte-identical output.

extern crate alloc;

use alloc::string::String;
use core::fmt::Write as _;

use kurbo::{Point, Vec2};

use crate::number::round_to;

/// Appends path commands to an owned string.
#[derive(Clone, Debug)]
pub(crate) struct PathWriter {
    out: String,
    precision: u8,
}

impl PathWriter {
    pub(crate) fn new(precision: u8) -> Self {
        Self {
            out: String::new(),
            precision,
        }
    }

    /// Absolute move (the first `m` of a path is always absolute).
    pub(crate) fn move_to(&mut self, p: Point) {
        self.command('m');
        self.pair(p.x, p.y);
    }

    /// Relative move, used to start a second sub-path.
    pub(crate) fn move_by(&mut self, d: Vec2) {
        self.command('m');
        self.pair(d.x, d.y);
    }

    pub(crate) fn line_by(&mut self, d: Vec2) {
        self.command('l');
        self.pair(d.x, d.y);
    }

    /// Appends a fragment that was already rounded and formatted.
    pub(crate) fn fragment(&mut self, fragment: &str) {
        self.separate();
        self.out.push_str(fragment);
    }

    pub(crate) fn close(&mut self) {
        self.command('z');
    }

    pub(crate) fn finish(self) -> String {
        self.out
    }

    fn separate(&mut self) {
        if !self.out.is_empty() {
            self.out.push(' ');
        }
    }

    fn command(&mut self, c: char) {
        self.separate();
        self.out.push(c);
    }

    fn pair(&mut self, a: f64, b: f64) {
        self.number(a);
        self.out.push(' ');
        self.number(b);
    }

    fn number(&mut self, v: f64) {
        // Writing into a `String` cannot fail.
        let _ = write!(self.out, "{}", round_to(v, self.precision));
    }
}

/// Formats one arc command: `a<r> <r> 0 <large> <sweep> <dx> <dy>`.
pub(crate) fn arc_fragment(
    radius: f64,
    large: bool,
    sweep: bool,
    delta: Vec2,
    precision: u8,
) -> String {
    let r = round_to(radius, precision);
    let mut out = String::new();
    let _ = write!(
        out,
        "a{r} {r} 0 {} {} {} {}",
        u8::from(large),
        u8::from(sweep),
        round_to(delta.x, precision),
        round_to(delta.y, precision),
    );
    out
}
