//! Site-wide lightbox state.
//!
//! DESIGN
//! ======
//! One lightbox exists per app. `App` provides it as an
//! `RwSignal<LightboxState>` and any image can open it by updating that
//! signal; there is no global opener.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use super::gallery::{Gallery, GalleryInput};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(Gallery),
}

impl LightboxState {
    pub fn open(&mut self, gallery: Gallery) {
        *self = Self::Open(gallery);
    }

    pub fn open_single(&mut self, src: impl Into<String>, alt: impl Into<String>) {
        self.open(Gallery::single(src, alt));
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Gallery> {
        match self {
            Self::Open(gallery) => Some(gallery),
            Self::Closed => None,
        }
    }

    /// Jump the open gallery to `index`. Ignored while closed or out of range.
    pub fn go_to(&mut self, index: usize) {
        if let Self::Open(gallery) = self {
            gallery.go_to(index);
        }
    }

    /// Route an input to the open gallery. `Close` dismisses; inputs while
    /// closed do nothing.
    pub fn apply(&mut self, input: GalleryInput) {
        match self {
            Self::Open(gallery) => {
                if !gallery.apply(input) {
                    self.close();
                }
            }
            Self::Closed => {}
        }
    }
}
