use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::assign::{AssignError, ColorAssigner};
use crate::color::Color;

/// One segment of the wheel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prize {
    pub name: String,
    pub color: Color,
}

/// Prize list in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wheel {
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

impl Wheel {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn used_colors(&self) -> Vec<Color> {
        self.prizes.iter().map(|p| p.color).collect()
    }

    /// Append a prize, coloring it so it stands apart from the others.
    pub fn add_prize<R>(
        &mut self,
        name: impl Into<String>,
        assigner: &ColorAssigner,
        rng: &mut R,
    ) -> Result<&Prize, AssignError>
    where
        R: RngCore + ?Sized,
    {
        let color = assigner.assign_color(self.prizes.iter().map(|p| p.color), rng)?;
        let idx = self.prizes.len();
        self.prizes.push(Prize {
            name: name.into(),
            color,
        });
        Ok(&self.prizes[idx])
    }

    pub fn remove_prize(&mut self, index: usize) -> Option<Prize> {
        (index < self.prizes.len()).then(|| self.prizes.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn prizes_take_palette_colors_in_order() {
        let a = ColorAssigner::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut w = Wheel::default();
        for name in ["A", "B", "C"] {
            w.add_prize(name, &a, &mut rng).unwrap();
        }
        let colors: Vec<String> = w.used_colors().iter().map(Color::to_string).collect();
        assert_eq!(colors, ["#f44336", "#ff9800", "#ffd600"]);
    }

    #[test]
    fn removed_color_is_reused() {
        let a = ColorAssigner::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut w = Wheel::default();
        for name in ["A", "B", "C"] {
            w.add_prize(name, &a, &mut rng).unwrap();
        }
        let removed = w.remove_prize(1).unwrap();
        assert_eq!(removed.name, "B");
        let added = w.add_prize("D", &a, &mut rng).unwrap();
        assert_eq!(added.color.to_string(), "#ff9800");
        assert!(w.remove_prize(10).is_none());
    }

    #[test]
    fn json_round_trip_normalizes_case() {
        let w = Wheel::from_json(r##"{"prizes":[{"name":"Tea","color":"#F44336"}]}"##).unwrap();
        assert_eq!(
            w.to_json().unwrap(),
            r##"{"prizes":[{"name":"Tea","color":"#f44336"}]}"##
        );
        assert_eq!(Wheel::from_json("{}").unwrap(), Wheel::default());
    }
}
