//! Cyclic image gallery shared by the lightbox and the inline slide viewer.
//!
//! DESIGN
//! ======
//! A gallery is never empty and its index is always in range, so views can
//! read the current image without a fallible lookup. Navigation wraps at both
//! ends and every input maps to exactly one transition; nothing is debounced.
//! `direction` only orients the transition animation.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// One image in a gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

/// Orientation of the most recent transition. The discriminant is the signed
/// step, so `direction as i8` gives -1, 0, or +1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(i8)]
pub enum Direction {
    Backward = -1,
    #[default]
    None = 0,
    Forward = 1,
}

impl Direction {
    /// CSS modifier used to pick the slide-in animation.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Backward => "slide-from-left",
            Self::None => "slide-fade",
            Self::Forward => "slide-from-right",
        }
    }
}

/// A discrete navigation request from keyboard, swipe, or controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryInput {
    Next,
    Previous,
    /// Only meaningful to the lightbox; the inline viewer ignores it.
    Close,
}

impl GalleryInput {
    /// Map a `KeyboardEvent.key` value to an input.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | "ArrowDown" => Some(Self::Next),
            "ArrowLeft" | "ArrowUp" => Some(Self::Previous),
            "Escape" => Some(Self::Close),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    index: usize,
    direction: Direction,
}

impl Gallery {
    /// Open at `start`, clamped to the last image. `None` for an empty list.
    #[must_use]
    pub fn new(images: Vec<GalleryImage>, start: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = start.min(images.len() - 1);
        Some(Self { images, index, direction: Direction::None })
    }

    /// A one-image gallery.
    #[must_use]
    pub fn single(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { images: vec![GalleryImage::new(src, alt)], index: 0, direction: Direction::None }
    }

    /// Build from bare paths sharing one alt-text prefix.
    ///
    /// Each image's alt text is `"{alt} {n}"` with a 1-based `n`.
    #[must_use]
    pub fn from_sources(sources: &[&str], alt: &str, start: usize) -> Option<Self> {
        let images = sources
            .iter()
            .enumerate()
            .map(|(i, src)| GalleryImage::new(*src, format!("{alt} {}", i + 1)))
            .collect();
        Self::new(images, start)
    }

    #[must_use]
    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Always false; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn current(&self) -> &GalleryImage {
        &self.images[self.index]
    }

    /// Whether prev/next controls and indicator dots should be shown.
    #[must_use]
    pub fn can_navigate(&self) -> bool {
        self.images.len() > 1
    }

    /// "n / len" with a 1-based `n`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.images.len();
        self.direction = Direction::Forward;
    }

    pub fn previous(&mut self) {
        let len = self.images.len();
        self.index = (self.index + len - 1) % len;
        self.direction = Direction::Backward;
    }

    /// Jump to `index`. Out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.direction = if index > self.index { Direction::Forward } else { Direction::Backward };
        self.index = index;
    }

    /// Apply a navigation input. Returns `false` for `Close`, which a
    /// gallery cannot act on by itself.
    pub fn apply(&mut self, input: GalleryInput) -> bool {
        match input {
            GalleryInput::Next => self.next(),
            GalleryInput::Previous => self.previous(),
            GalleryInput::Close => return false,
        }
        true
    }
}
