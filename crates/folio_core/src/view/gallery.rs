//! Image gallery modal state.

/// Gallery images plus the image currently shown in the modal, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    images: Vec<String>,
    active: Option<usize>,
}

impl GalleryState {
    /// Closed gallery over `images`.
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            active: None,
        }
    }

    /// Gallery images in source order.
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// `true` when there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Opens the modal on `src`. Sources outside the gallery are ignored.
    pub fn open(&mut self, src: &str) -> bool {
        match self.images.iter().position(|image| image == src) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    /// Closes the modal.
    pub fn close(&mut self) {
        self.active = None;
    }

    /// `true` while an image is shown.
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// Source of the image shown in the modal.
    pub fn active_src(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.images.get(index))
            .map(String::as_str)
    }
}
