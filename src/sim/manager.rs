//! Ball manager
//!
//! Owns the ball collection and regenerates it in bulk from the injected
//! random source.

use rand_pcg::Pcg32;
use serde::Serialize;

use super::rng::{SharedRng, UniformSource, sample_range};
use super::state::Ball;
use crate::error::SimError;
use crate::settings::WorldSettings;

/// Serializable view of the managed balls
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub balls: &'a [Ball],
    pub selected: Option<u32>,
}

/// Owner of the ball collection
pub struct BallManager<R: UniformSource = Pcg32> {
    balls: Vec<Ball>,
    /// Handle into `balls`, cleared whenever the collection is replaced
    selected: Option<u32>,
    rng: SharedRng<R>,
    settings: WorldSettings,
    /// Next entity ID (wraps after `u32::MAX`)
    next_id: u32,
}

impl<R: UniformSource> BallManager<R> {
    /// Create an empty manager drawing from `rng`
    pub fn new(rng: SharedRng<R>, settings: WorldSettings) -> Result<Self, SimError> {
        settings.validate()?;
        let mut balls = Vec::new();
        balls.try_reserve(settings.initial_capacity)?;
        Ok(Self {
            balls,
            selected: None,
            rng,
            settings,
            next_id: 0,
        })
    }

    /// Discard every ball and spawn `count` new ones at random
    ///
    /// Each ball draws x, then y, then radius from the shared source. If the
    /// source is already borrowed or storage for `count` balls cannot be
    /// reserved, the current collection and selection are left untouched.
    pub fn replace_all_randomly(&mut self, count: usize) -> Result<(), SimError> {
        let mut rng = self.rng.try_borrow_mut()?;

        // Reserve before clearing; capacity >= len + (count - len) == count
        if count > self.balls.capacity() {
            self.balls.try_reserve(count - self.balls.len())?;
        }
        self.balls.clear();
        self.selected = None;

        let half = self.settings.half_size();
        let (min_radius, max_radius) = (self.settings.min_radius, self.settings.max_radius);
        for _ in 0..count {
            let x = sample_range(&mut *rng, -half.x, half.x);
            let y = sample_range(&mut *rng, -half.y, half.y);
            let radius = sample_range(&mut *rng, min_radius, max_radius);

            let id = self.next_id;
            self.next_id = self.next_id.wrapping_add(1);
            self.balls.push(Ball::new(id, x, y, radius));
        }

        // Construction uses the default scale; apply the configured one
        let scale = self.settings.mass_scale_by_radius;
        for ball in &mut self.balls {
            ball.recompute_mass(scale);
        }

        log::debug!(
            "Spawned {} balls in {}x{} (capacity {})",
            count,
            self.settings.width,
            self.settings.height,
            self.balls.capacity()
        );
        Ok(())
    }

    /// Empty the collection; the random source is left alone
    pub fn clear(&mut self) {
        self.balls.clear();
        self.selected = None;
    }

    #[inline]
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    #[inline]
    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id)
    }

    /// Mark a ball as selected
    pub fn select(&mut self, id: u32) -> Result<(), SimError> {
        if self.get(id).is_none() {
            return Err(SimError::NoSuchBall(id));
        }
        self.selected = Some(id);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Ball> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn selected_mut(&mut self) -> Option<&mut Ball> {
        let id = self.selected?;
        self.get_mut(id)
    }

    pub fn settings(&self) -> &WorldSettings {
        &self.settings
    }

    /// The injected random source
    pub fn rng(&self) -> &SharedRng<R> {
        &self.rng
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            balls: &self.balls,
            selected: self.selected,
        }
    }
}

impl<R: UniformSource> Drop for BallManager<R> {
    fn drop(&mut self) {
        log::debug!("Releasing {} balls", self.balls.len());
        self.clear();
    }
}
