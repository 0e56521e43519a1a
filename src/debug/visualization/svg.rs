// src/debug/visualization/svg.rs

//! Draufsicht einer Strecke als SVG.
//!
//! Die Bodenebene (x, z) wird direkt auf die SVG-Achsen (x, y) abgebildet, das
//! entspricht dem Blick von oben (+Y) auf die Strecke.

use crate::{
    math::{
        error::TrackResult,
        geometry::mesh::StripMesh,
        types::{Bounds2D, Point2D},
    },
    track::CommittedTrack,
};
use bevy::log::info;
use svg::{
    Document, Node,
    node::element::{Circle, Line, Polygon, Polyline, Rectangle, Style},
};
use std::path::Path;

/// Rand um die Strecke in Streckeneinheiten.
const MARGIN: f32 = 5.0;
/// Kantenlänge der Ausgabe in Pixeln.
const SVG_PIXEL_SIZE: f64 = 800.0;

// ===================================================================================
// HILFS-STRUCT für die SVG-Erstellung
// ===================================================================================
/// Sammelt Elemente und berechnet Strichstärken relativ zur Zeichenfläche.
struct SvgBuilder {
    document: Document,
    stroke_w_normal: f64,
    point_radius: f64,
}

impl SvgBuilder {
    /// Erstellt das Grundgerüst mit ViewBox, Stilen und Hintergrund.
    fn new(display_bounds: &Bounds2D) -> Self {
        let min_x = display_bounds.min.x as f64;
        let min_y = display_bounds.min.y as f64;
        let width = display_bounds.width() as f64;
        let height = display_bounds.height() as f64;

        let extent = (width + height) / 2.0;
        let stroke_w_normal = extent * 0.004;
        let stroke_w_thin = extent * 0.0015;
        let point_radius = extent * 0.006;

        let style = Style::new(format!(
            r#"
    .background {{ fill: #f0f0f0; }}
    .random-point {{ fill: #ffaaaa; stroke: #cc0000; stroke-width: {stroke_w_thin}; }}
    .hull {{ fill: none; stroke: #999999; stroke-width: {stroke_w_thin}; }}
    .skeleton {{ fill: none; stroke: #5500aa; stroke-width: {stroke_w_thin}; stroke-dasharray: {dash},{dash}; }}
    .road {{ fill: #555555; stroke: #333333; stroke-width: {hair}; }}
    .wall {{ fill: none; stroke: #aa6600; stroke-width: {stroke_w_normal}; }}
    .center-line {{ fill: none; stroke: #ffffff; stroke-width: {stroke_w_thin}; }}
    .start {{ stroke: #00aa00; stroke-width: {stroke_w_normal}; }}
    .overlap {{ fill: #ff0000; fill-opacity: 0.8; }}
"#,
            dash = stroke_w_normal * 2.0,
            hair = stroke_w_thin * 0.3,
        ));

        let document = Document::new()
            .set("width", SVG_PIXEL_SIZE)
            .set("height", SVG_PIXEL_SIZE)
            .set("viewBox", (min_x, min_y, width, height))
            .add(style)
            .add(
                Rectangle::new()
                    .set("x", min_x)
                    .set("y", min_y)
                    .set("width", width)
                    .set("height", height)
                    .set("class", "background"),
            );

        Self {
            document,
            stroke_w_normal,
            point_radius,
        }
    }

    fn points_attr(points: impl IntoIterator<Item = Point2D>) -> String {
        points
            .into_iter()
            .map(|p| format!("{:.3},{:.3}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Zeichnet einen geschlossenen Ring.
    fn draw_polygon(&mut self, vertices: &[Point2D], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let element = Polygon::new()
            .set("points", Self::points_attr(vertices.iter().copied()))
            .set("class", class);
        self.add(element);
    }

    /// Zeichnet einen geschlossenen Linienzug (erster Punkt wird wiederholt).
    fn draw_closed_polyline(&mut self, vertices: &[Point2D], class: &str) {
        if vertices.len() < 2 {
            return;
        }
        let closed = vertices.iter().chain(vertices.first()).copied();
        let element = Polyline::new()
            .set("points", Self::points_attr(closed))
            .set("class", class);
        self.add(element);
    }

    fn draw_circle(&mut self, center: Point2D, radius: f64, class: &str) {
        let element = Circle::new()
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius)
            .set("class", class);
        self.add(element);
    }

    fn draw_line(&mut self, from: Point2D, to: Point2D, class: &str) {
        let element = Line::new()
            .set("x1", from.x)
            .set("y1", from.y)
            .set("x2", to.x)
            .set("y2", to.y)
            .set("class", class);
        self.add(element);
    }

    /// Zeichnet alle Dreiecke eines Netzes in der Bodenebene.
    fn draw_mesh(&mut self, mesh: &StripMesh, class: &str) {
        let ground = mesh.ground_positions();
        for [a, b, c] in mesh.triangles() {
            let corners = [a, b, c].map(|i| ground.get(i as usize).copied());
            if let [Some(a), Some(b), Some(c)] = corners {
                self.draw_polygon(&[a, b, c], class);
            }
        }
    }

    fn add<T: Node>(&mut self, node: T) {
        self.document.append(node);
    }

    fn finish(self) -> Document {
        self.document
    }
}

fn display_bounds(points: impl IntoIterator<Item = Point2D>) -> Bounds2D {
    Bounds2D::from_points_iter(points)
        .unwrap_or(Bounds2D {
            min: Point2D::ZERO,
            max: Point2D::splat(100.0),
        })
        .expand(MARGIN)
}

/// Draufsicht einer fertigen Strecke: Zufallspunkte, Hülle, Skelett, Fahrbahn,
/// Wände, Mittellinie und Startmarkierung.
pub fn render_track_svg(track: &CommittedTrack) -> Document {
    let road_ground = track.road().map(StripMesh::ground_positions).unwrap_or_default();
    let bounds = display_bounds(
        road_ground
            .iter()
            .chain(&track.skeleton.random_points)
            .chain(track.path.points())
            .copied(),
    );

    let mut svg = SvgBuilder::new(&bounds);
    for part in &track.parts {
        let class = if part.label.starts_with("wall") {
            "wall"
        } else {
            "road"
        };
        if class == "wall" {
            // Nur die Bodenkante der Wand ist von oben sichtbar
            let base: Vec<Point2D> = part
                .mesh
                .positions
                .iter()
                .step_by(2)
                .map(|p| Point2D::new(p.x, p.z))
                .collect();
            svg.draw_closed_polyline(&base, class);
        } else {
            svg.draw_mesh(&part.mesh, class);
        }
    }
    svg.draw_polygon(&track.skeleton.hull, "hull");
    svg.draw_polygon(&track.skeleton.skeleton, "skeleton");
    svg.draw_closed_polyline(track.path.points(), "center-line");

    let radius = svg.point_radius;
    for &p in &track.skeleton.random_points {
        svg.draw_circle(p, radius, "random-point");
    }

    let arrow_length = svg.stroke_w_normal as f32 * 10.0;
    let start = track.start;
    svg.draw_line(
        start.position,
        start.position + start.direction * arrow_length,
        "start",
    );
    svg.draw_circle(start.position, radius * 1.5, "start");

    svg.finish()
}

/// Draufsicht eines einzelnen Netzes mit markierten Überschneidungen,
/// z.B. für eine verworfene Fahrbahn.
pub fn render_overlap_svg(mesh: &StripMesh, overlaps: &[Point2D]) -> Document {
    let ground = mesh.ground_positions();
    let bounds = display_bounds(ground.iter().chain(overlaps).copied());

    let mut svg = SvgBuilder::new(&bounds);
    svg.draw_mesh(mesh, "road");
    let radius = svg.point_radius * 1.5;
    for &p in overlaps {
        svg.draw_circle(p, radius, "overlap");
    }
    svg.finish()
}

/// Schreibt [`render_track_svg`] nach `path`.
pub fn write_track_svg<P: AsRef<Path>>(path: P, track: &CommittedTrack) -> TrackResult<()> {
    let path = path.as_ref();
    svg::save(path, &render_track_svg(track))?;
    info!("Track SVG written to {}", path.display());
    Ok(())
}
