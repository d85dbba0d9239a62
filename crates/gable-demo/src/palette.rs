use gable_engine::geometry::Part;
use gable_engine::paint::Color;
use gable_engine::render::RenderMode;

/// Colors of the wall, roof and door for one render mode.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PartColors {
    pub wall: Color,
    pub roof: Color,
    pub door: Color,
}

impl PartColors {
    pub const fn get(&self, part: Part) -> Color {
        match part {
            Part::Wall => self.wall,
            Part::Roof => self.roof,
            Part::Door => self.door,
        }
    }
}

/// Background plus per-mode part colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub clear: Color,
    pub triangles: PartColors,
    pub lines: PartColors,
    pub points: PartColors,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            clear: Color::rgb(0.2, 0.3, 0.3),
            triangles: PartColors {
                wall: Color::WHITE,
                roof: Color::BLACK,
                door: Color::BLACK,
            },
            lines: PartColors {
                wall: Color::GREEN,
                roof: Color::BLUE,
                door: Color::BLUE,
            },
            points: PartColors {
                wall: Color::RED,
                roof: Color::WHITE,
                door: Color::WHITE,
            },
        }
    }
}

impl Palette {
    pub fn colors(&self, mode: RenderMode) -> &PartColors {
        match mode {
            RenderMode::Triangles => &self.triangles,
            RenderMode::Lines => &self.lines,
            RenderMode::Points => &self.points,
        }
    }

    pub fn color(&self, mode: RenderMode, part: Part) -> Color {
        self.colors(mode).get(part)
    }
}
