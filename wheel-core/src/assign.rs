use std::collections::HashSet;

use rand::RngCore;
use tracing::{debug, trace, warn};

use crate::color::{COLOR_SPACE, Color};
use crate::palette::Palette;

/// Random draws attempted before falling back to a linear probe.
pub const RANDOM_ATTEMPTS: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    #[error("every color is already used or reserved")]
    ColorSpaceExhausted,
}

/// Hands out colors for new prize segments.
///
/// Palette colors are used in order; after that colors are drawn from the
/// injected random source, skipping anything already used or reserved.
#[derive(Clone, Debug)]
pub struct ColorAssigner {
    palette: Palette,
    excluded: HashSet<Color>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl ColorAssigner {
    pub fn new(palette: Palette) -> Self {
        let excluded = palette.excluded.iter().copied().collect();
        ColorAssigner { palette, excluded }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Pick a color for a new prize given the colors of the existing ones.
    ///
    /// Entries of `used` that are not `#rrggbb` codes never conflict with anything.
    pub fn get_new_prize_color<S, R>(&self, used: &[S], rng: &mut R) -> Result<Color, AssignError>
    where
        S: AsRef<str>,
        R: RngCore + ?Sized,
    {
        self.assign_color(used_set(used), rng)
    }

    /// Same as [`get_new_prize_color`](Self::get_new_prize_color) for callers
    /// that already hold parsed colors.
    pub fn assign_color<I, R>(&self, used: I, rng: &mut R) -> Result<Color, AssignError>
    where
        I: IntoIterator<Item = Color>,
        R: RngCore + ?Sized,
    {
        let used: HashSet<Color> = used.into_iter().collect();
        if let Some(color) = self.get_available_color(&used) {
            trace!(%color, "assigned palette color");
            return Ok(color);
        }
        debug!(used = used.len(), "palette exhausted, drawing a random color");
        let color = self
            .get_random_color(&used, rng)
            .ok_or(AssignError::ColorSpaceExhausted)?;
        trace!(%color, "assigned random color");
        Ok(color)
    }

    /// First palette color that is neither used nor reserved.
    pub(crate) fn get_available_color(&self, used: &HashSet<Color>) -> Option<Color> {
        self.palette
            .colors
            .iter()
            .copied()
            .find(|c| !used.contains(c) && !self.excluded.contains(c))
    }

    pub(crate) fn get_random_color<R>(&self, used: &HashSet<Color>, rng: &mut R) -> Option<Color>
    where
        R: RngCore + ?Sized,
    {
        let taken = |c: &Color| used.contains(c) || self.excluded.contains(c);

        let mut last = 0;
        for _ in 0..RANDOM_ATTEMPTS {
            let candidate = Color::from_rgb(rng.next_u32());
            if !taken(&candidate) {
                return Some(candidate);
            }
            last = candidate.rgb();
        }

        let reserved = self.excluded.iter().filter(|c| !used.contains(c)).count();
        if used.len() + reserved >= COLOR_SPACE as usize {
            return None;
        }
        warn!(
            attempts = RANDOM_ATTEMPTS,
            used = used.len(),
            "random draws kept colliding, probing for a free color"
        );
        (1..=COLOR_SPACE)
            .map(|step| Color::from_rgb(last.wrapping_add(step)))
            .find(|c| !taken(c))
    }
}

fn used_set<S: AsRef<str>>(used: &[S]) -> HashSet<Color> {
    used.iter()
        .filter_map(|entry| {
            let entry = entry.as_ref();
            match entry.parse::<Color>() {
                Ok(c) => Some(c),
                Err(err) => {
                    debug!(entry, %err, "ignoring malformed used color");
                    None
                }
            }
        })
        .collect()
}
