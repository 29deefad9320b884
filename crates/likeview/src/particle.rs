use egui::{Color32, Pos2};

/// One confetti dot, travelling outward from `origin` along `angle`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub origin: Pos2,
    pub target_distance: f32,
    pub current_distance: f32,
    pub size: f32,
    /// Degrees, measured from the +y axis.
    pub angle: f32,
    /// Base color; its alpha channel is the starting opacity.
    pub color: Color32,
    /// Opacity for the current frame.
    pub alpha: u8,
}

impl Particle {
    pub fn new(origin: Pos2, target_distance: f32, size: f32, angle: f32, color: Color32) -> Self {
        Self {
            origin,
            target_distance,
            current_distance: 0.0,
            size,
            angle,
            color,
            alpha: color.a(),
        }
    }

    /// Where the particle sits at its current distance.
    pub fn position(&self) -> Pos2 {
        let (sin, cos) = self.angle.to_radians().sin_cos();
        Pos2::new(
            self.origin.x + self.current_distance * sin,
            self.origin.y + self.current_distance * cos,
        )
    }

    pub fn current_color(&self) -> Color32 {
        with_alpha(self.color, self.alpha)
    }

    pub fn visual(&self) -> ParticleVisual {
        ParticleVisual {
            pos: self.position(),
            size: self.size,
            color: self.current_color(),
        }
    }

    pub fn is_done(&self) -> bool {
        self.current_distance == self.target_distance
    }
}

/// What the drawing layer needs to paint one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleVisual {
    pub pos: Pos2,
    pub size: f32,
    pub color: Color32,
}

/// Replaces the alpha channel, keeping the RGB of `color`.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pink() -> Color32 {
        Color32::from_rgb(228, 13, 86)
    }

    #[test]
    fn new_particle_starts_at_origin_fully_opaque() {
        let p = Particle::new(Pos2::new(10.0, 20.0), 65.0, 3.0, 90.0, pink());
        assert_eq!(p.current_distance, 0.0);
        assert_eq!(p.alpha, 255);
        assert_eq!(p.position(), Pos2::new(10.0, 20.0));
        assert!(!p.is_done());
    }

    #[test]
    fn angle_zero_travels_down_the_y_axis() {
        let mut p = Particle::new(Pos2::ZERO, 65.0, 3.0, 0.0, pink());
        p.current_distance = 65.0;
        let pos = p.position();
        assert!(pos.x.abs() < 1e-4);
        assert!((pos.y - 65.0).abs() < 1e-4);
        assert!(p.is_done());
    }

    #[test]
    fn angle_ninety_travels_along_x() {
        let mut p = Particle::new(Pos2::ZERO, 60.0, 3.0, 90.0, pink());
        p.current_distance = 30.0;
        let pos = p.position();
        assert!((pos.x - 30.0).abs() < 1e-4);
        assert!(pos.y.abs() < 1e-4);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        let c = with_alpha(pink(), 85);
        let [r, g, b, a] = c.to_srgba_unmultiplied();
        assert_eq!(a, 85);
        // premultiplied storage loses a little precision
        assert!(r.abs_diff(228) <= 3 && g.abs_diff(13) <= 3 && b.abs_diff(86) <= 3);
    }

    #[test]
    fn visual_carries_current_alpha() {
        let mut p = Particle::new(Pos2::ZERO, 60.0, 4.0, 0.0, pink());
        p.alpha = 0;
        let v = p.visual();
        assert_eq!(v.size, 4.0);
        assert_eq!(v.color.a(), 0);
    }
}
