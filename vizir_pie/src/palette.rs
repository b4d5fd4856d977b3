// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cyclic palette lookup.

/// Returns the palette entry following `previous`, wrapping around at the end.
///
/// With no previous color, or one that isn't in the palette, the first entry is used.
/// An empty palette yields `None`, leaving the fill to the renderer's default.
///
/// A color value can't tell repeated entries apart, so with duplicates the successor of the
/// first matching entry is used. Layout tracks palette positions instead and never gets stuck.
pub fn next_color<C: Clone + PartialEq>(palette: &[C], previous: Option<&C>) -> Option<C> {
    let previous = previous.and_then(|prev| palette.iter().position(|c| c == prev));
    next_index(palette.len(), previous).and_then(|i| palette.get(i).cloned())
}

/// Palette position following `previous` in a palette of `len` entries.
pub(crate) fn next_index(len: usize, previous: Option<usize>) -> Option<usize> {
    (len > 0).then(|| previous.map_or(0, |i| (i + 1) % len))
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn cycles_through_the_palette() {
        let palette = [css::CORNFLOWER_BLUE, css::TOMATO, css::GOLD];
        let a = next_color(&palette, None);
        let b = next_color(&palette, a.as_ref());
        let c = next_color(&palette, b.as_ref());
        let d = next_color(&palette, c.as_ref());
        assert_eq!(a, Some(css::CORNFLOWER_BLUE));
        assert_eq!(b, Some(css::TOMATO));
        assert_eq!(c, Some(css::GOLD));
        assert_eq!(d, Some(css::CORNFLOWER_BLUE));
    }

    #[test]
    fn unknown_previous_restarts_and_empty_yields_none() {
        assert_eq!(next_color(&["a", "b"], Some(&"z")), Some("a"));
        assert_eq!(next_color::<&str>(&[], Some(&"a")), None);
        assert_eq!(next_color::<&str>(&[], None), None);
    }

    #[test]
    fn positions_wrap_and_reach_repeated_entries() {
        let palette = [css::RED, css::RED, css::BLUE];
        let mut slot = None;
        let mut seen = [None; 4];
        for color in &mut seen {
            slot = next_index(palette.len(), slot);
            *color = slot.map(|i| palette[i]);
        }
        assert_eq!(
            seen,
            [Some(css::RED), Some(css::RED), Some(css::BLUE), Some(css::RED)]
        );
        assert_eq!(next_index(0, Some(3)), None);
        assert_eq!(next_index(3, Some(7)), Some(2));
    }
}
