use crate::models::Listing;

/// Image carousel over a listing's cover and extra photos
#[derive(Debug, Clone)]
pub struct Gallery {
    images: Vec<String>,
    current: usize,
}

impl Gallery {
    pub fn for_listing(listing: &Listing) -> Self {
        let mut images = Vec::with_capacity(listing.details.images.len() + 1);
        images.push(listing.details.image_url.clone());
        images.extend(listing.details.images.iter().cloned());
        Self { images, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Arrows are only shown when there is somewhere to go
    pub fn has_navigation(&self) -> bool {
        self.images.len() > 1
    }

    pub fn current(&self) -> &str {
        &self.images[self.current]
    }

    pub fn index(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> &str {
        self.current = (self.current + 1) % self.images.len();
        self.current()
    }

    pub fn prev(&mut self) -> &str {
        let len = self.images.len();
        self.current = (self.current + len - 1) % len;
        self.current()
    }
}
