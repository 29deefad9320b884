use eframe::egui::{self, Color32, Mesh, Painter, Pos2, Rect, Shape, Stroke};

const HEART_SEGMENTS: usize = 48;

/// Icon handle for the demo buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heart {
    Filled,
    Outline,
}

pub const LIKED_COLOR: Color32 = Color32::from_rgb(228, 13, 86);
pub const UNLIKED_COLOR: Color32 = Color32::from_rgb(160, 160, 170);

/// Classic parametric heart, scaled to fit `rect`.
fn heart_outline(rect: Rect) -> Vec<Pos2> {
    // the curve spans x in [-16, 16] and y in [-17, 12]
    let scale = rect.width().min(rect.height()) / 34.0;
    let center = rect.center() + egui::vec2(0.0, 2.5 * scale);
    (0..HEART_SEGMENTS)
        .map(|i| {
            let t = i as f32 / HEART_SEGMENTS as f32 * std::f32::consts::TAU;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            Pos2::new(center.x + x * scale, center.y - y * scale)
        })
        .collect()
}

pub fn paint_heart(painter: &Painter, rect: Rect, heart: &Heart) {
    let outline = heart_outline(rect);
    match heart {
        Heart::Filled => {
            // fan from the middle; the heart is star-shaped around it
            let mut mesh = Mesh::default();
            mesh.colored_vertex(rect.center(), LIKED_COLOR);
            for p in &outline {
                mesh.colored_vertex(*p, LIKED_COLOR);
            }
            let n = outline.len() as u32;
            for i in 1..=n {
                mesh.add_triangle(0, i, i % n + 1);
            }
            painter.add(Shape::mesh(mesh));
        }
        Heart::Outline => {
            painter.add(Shape::closed_line(outline, Stroke::new(2.0, UNLIKED_COLOR)));
        }
    }
}
