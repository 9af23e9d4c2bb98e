// crates/profile/src/application/highlights/carousel.rs

/// Déplacement horizontal minimal pour qu'un geste compte comme swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Next,
    Previous,
}

/// Carrousel d'un élément à la fois, bouclant aux deux extrémités.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Points de navigation affichés uniquement à partir de deux éléments
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Clic sur un point ; hors bornes ignoré.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Seul le déplacement horizontal est pris en compte.
    pub fn swipe(&mut self, start: (f64, f64), end: (f64, f64)) -> Option<SwipeDirection> {
        let delta_x = end.0 - start.0;
        if delta_x.abs() < SWIPE_THRESHOLD_PX || !self.has_navigation() {
            return None;
        }

        if delta_x < 0.0 {
            self.next();
            Some(SwipeDirection::Next)
        } else {
            self.previous();
            Some(SwipeDirection::Previous)
        }
    }
}
