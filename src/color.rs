// color.rs - Theme colors
//
// The host resolves semantic names (CSS custom properties) to color strings.
// Lookups are slow on the host side, so the palette is read once and kept
// until the theme changes.

/// Resolves a semantic color name to a CSS color string
pub trait ColorSource {
    fn color(&self, name: &str) -> String;
}

impl<F: Fn(&str) -> String> ColorSource for F {
    fn color(&self, name: &str) -> String {
        self(name)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette {
    pub bg: String,
    pub text: String,
    pub text_muted: String,
    pub primary: String,
    pub border: String,
    pub surface: String,
}

impl Palette {
    pub fn read(source: &impl ColorSource) -> Self {
        Self {
            bg: source.color("--color-bg"),
            text: source.color("--color-text"),
            text_muted: source.color("--color-text-muted"),
            primary: source.color("--color-primary"),
            border: source.color("--color-border"),
            surface: source.color("--color-surface"),
        }
    }
}

/// Lazily filled palette, dropped on theme change
#[derive(Debug, Default)]
pub struct ColorCache {
    palette: Option<Palette>,
}

impl ColorCache {
    pub fn new() -> Self {
        Self { palette: None }
    }

    pub fn invalidate(&mut self) {
        self.palette = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.palette.is_some()
    }

    pub fn get(&mut self, source: &impl ColorSource) -> &Palette {
        self.palette.get_or_insert_with(|| Palette::read(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn reads_once_until_invalidated() {
        let calls = Cell::new(0);
        let source = |name: &str| {
            calls.set(calls.get() + 1);
            format!("c{name}")
        };
        let mut cache = ColorCache::new();
        assert!(!cache.is_loaded());

        assert_eq!(cache.get(&source).bg, "c--color-bg");
        cache.get(&source);
        assert_eq!(calls.get(), 6);

        cache.invalidate();
        assert!(!cache.is_loaded());
        cache.get(&source);
        assert_eq!(calls.get(), 12);
    }
}
