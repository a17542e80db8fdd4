use std::f64::consts::PI;

use girone_core::Polar;
use girone_geometry::{AnchorSquare, AnnularSector, Annulus, ArcPath, RadialTick, Sweep};

/// Format a coordinate the way the reference arc generators do: shortest
/// round-trip representation, integer values without a trailing `.0`,
/// near-zero noise collapsed to 0.
pub fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let mut buf = ryu::Buffer::new();
    let s = buf.format(v);
    s.strip_suffix(".0").unwrap_or(s).to_string()
}

fn point(p: Polar) -> String {
    let (x, y) = p.to_cartesian();
    format!("{},{}", fmt_num(x), fmt_num(y))
}

fn arc_to(radius: f64, large: bool, sweep: Sweep, end: Polar) -> String {
    format!(
        "A{r},{r},0,{large},{sweep},{end}",
        r = fmt_num(radius),
        large = large as u8,
        sweep = sweep.flag(),
        end = point(end),
    )
}

/// A bare arc: `M start A ... end`, traced in the path's sweep direction.
pub fn arc_path(arc: &ArcPath) -> String {
    format!(
        "M{}{}",
        point(arc.start_point()),
        arc_to(
            arc.radius,
            arc.angular_span() > PI,
            arc.sweep,
            arc.end_point()
        )
    )
}

/// Annular sector: outer arc forward, line inward, inner arc backward,
/// close. The command sequence of the reference generator.
pub fn annulus_path(annulus: &Annulus) -> String {
    let large = (annulus.end_angle - annulus.start_angle).abs() > PI;
    let outer_start = Polar::new(annulus.start_angle, annulus.outer_radius);
    let outer_end = Polar::new(annulus.end_angle, annulus.outer_radius);
    let inner_end = Polar::new(annulus.end_angle, annulus.inner_radius);
    let inner_start = Polar::new(annulus.start_angle, annulus.inner_radius);
    format!(
        "M{}{}L{}{}Z",
        point(outer_start),
        arc_to(annulus.outer_radius, large, Sweep::Clockwise, outer_end),
        point(inner_end),
        arc_to(annulus.inner_radius, large, Sweep::CounterClockwise, inner_start),
    )
}

/// Padded annular sector for the staffing glyphs. The pad angle is applied
/// as a symmetric angular inset; corner rounding is omitted (sub-pixel at
/// glyph size).
pub fn sector_path(sector: &AnnularSector) -> String {
    let padded = Annulus {
        inner_radius: sector.inner_radius,
        outer_radius: sector.outer_radius,
        start_angle: sector.start_angle + sector.pad_angle / 2.0,
        end_angle: sector.end_angle - sector.pad_angle / 2.0,
    };
    annulus_path(&padded)
}

/// Straight segment between two polar points.
pub fn line_path(near: Polar, far: Polar) -> String {
    format!("M{}L{}", point(near), point(far))
}

/// Radial tick crossing its thin ring.
pub fn tick_path(tick: &RadialTick) -> String {
    line_path(
        Polar::new(tick.angle, tick.inner_radius),
        Polar::new(tick.angle, tick.outer_radius),
    )
}

/// Centred square, drawn as a path so rotation needs no pivot.
pub fn square_path(square: &AnchorSquare) -> String {
    let [a, b, c, d] = square.corners();
    format!(
        "M{},{}L{},{}L{},{}L{},{}Z",
        fmt_num(a.0),
        fmt_num(a.1),
        fmt_num(b.0),
        fmt_num(b.1),
        fmt_num(c.0),
        fmt_num(c.1),
        fmt_num(d.0),
        fmt_num(d.1),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_integers_and_noise() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(2.5), "2.5");
        assert_eq!(fmt_num(1e-12), "0");
        assert_eq!(fmt_num(-3.0), "-3");
    }

    #[test]
    fn square_path_matches_reference_output() {
        assert_eq!(
            square_path(&AnchorSquare::new()),
            "M-2,-2L2,-2L2,2L-2,2Z"
        );
    }

    #[test]
    fn quarter_arc_serializes_with_sweep_one() {
        // 12 o'clock to 3 o'clock at radius 100
        let arc = ArcPath::new(100.0, 0.0, PI / 2.0);
        assert_eq!(arc_path(&arc), "M0,-100A100,100,0,0,1,100,0");
    }

    #[test]
    fn flipped_arc_swaps_endpoints_and_sweep() {
        let arc = ArcPath::new(100.0, 0.0, PI / 2.0).reversed();
        assert_eq!(arc_path(&arc), "M100,0A100,100,0,0,0,0,-100");
    }

    #[test]
    fn annulus_path_closes_through_the_inner_radius() {
        let annulus = Annulus {
            inner_radius: 50.0,
            outer_radius: 100.0,
            start_angle: 0.0,
            end_angle: PI / 2.0,
        };
        assert_eq!(
            annulus_path(&annulus),
            "M0,-100A100,100,0,0,1,100,0L50,0A50,50,0,0,0,0,-50Z"
        );
    }

    #[test]
    fn wide_arcs_set_the_large_flag() {
        let arc = ArcPath::new(10.0, 0.0, PI * 1.5);
        assert_eq!(arc_path(&arc), "M0,-10A10,10,0,1,1,-10,0");
    }

    #[test]
    fn sector_path_insets_by_half_the_pad_angle() {
        let sector = AnnularSector {
            inner_radius: 4.0,
            outer_radius: 5.0,
            start_angle: -1.0,
            end_angle: 1.0,
            pad_angle: 0.2,
            corner_radius: 0.5,
        };
        let padded = sector_path(&sector);
        let unpadded = annulus_path(&Annulus {
            inner_radius: 4.0,
            outer_radius: 5.0,
            start_angle: -0.9,
            end_angle: 0.9,
        });
        assert_eq!(padded, unpadded);
    }

    #[test]
    fn tick_path_runs_radially() {
        let tick = RadialTick::new(PI / 2.0, 100.0, 2.5);
        assert_eq!(tick_path(&tick), "M97.5,0L102.5,0");
    }
}
