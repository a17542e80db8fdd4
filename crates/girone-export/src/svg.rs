use std::fmt::Write;

use girone_core::{ChartConfig, Half, RingTone, Theme};
use girone_layout::{Chart, HalfChart, Legend};

use crate::paths::{
    annulus_path, arc_path, fmt_num, line_path, sector_path, square_path, tick_path,
};

#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("chart has no sectors to draw")]
    Empty,
}

/// Serialize a computed chart into a standalone SVG document.
pub fn svg_document(chart: &Chart, theme: &Theme, cfg: &ChartConfig) -> Result<String, SvgError> {
    if chart.top.sectors.is_empty() && chart.bottom.sectors.is_empty() {
        return Err(SvgError::Empty);
    }

    let mut out = String::new();
    let _ = write!(
        out,
        "<svg viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\" \
         xmlns:xlink=\"http://www.w3.org/1999/xlink\" font-family=\"sans-serif\" \
         style=\"background:{bg}\">",
        w = fmt_num(cfg.width()),
        h = fmt_num(cfg.height),
        bg = theme.background,
    );

    for heading in &chart.headings {
        group_translate(&mut out, heading.translate);
        write_wrapped(
            &mut out,
            &heading.text,
            heading.font_size,
            &theme.foreground,
            "start",
            heading.weight,
        );
        out.push_str("</g>");
    }

    write_half(&mut out, &chart.top, theme, cfg);
    write_half(&mut out, &chart.bottom, theme, cfg);
    write_legend(&mut out, &chart.legend, theme);

    out.push_str("</svg>");
    Ok(out)
}

fn group_translate(out: &mut String, (x, y): (f64, f64)) {
    let _ = write!(
        out,
        "<g transform=\"translate({},{})\">",
        fmt_num(x),
        fmt_num(y)
    );
}

fn write_half(out: &mut String, half: &HalfChart, theme: &Theme, cfg: &ChartConfig) {
    let class = match half.half {
        Half::Top => "top",
        Half::Bottom => "bottom",
    };
    group_translate(out, half.translate);

    // percentage scale sits below everything else
    for ring in &half.rings {
        let _ = write!(
            out,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"0.5\"/>",
            arc_path(&ring.arc),
            theme.ring(ring.tone),
        );
    }

    for (i, sector) in half.sectors.iter().enumerate() {
        let fill = theme.sector(sector.tone);
        let text_fill = theme.sector(sector.label_tone);
        let _ = write!(
            out,
            "<path d=\"{}\" fill=\"{}\"/>",
            annulus_path(&sector.background),
            fill,
        );
        let label_id = format!("labelPath-{class}-{i}");
        let _ = write!(
            out,
            "<path id=\"{}\" d=\"{}\" fill=\"transparent\"/>",
            label_id,
            arc_path(&sector.label.path),
        );
        let _ = write!(
            out,
            "<text dy=\"0.5\" font-size=\"6\" fill=\"{}\"><textPath xlink:href=\"#{}\" \
             startOffset=\"{}%\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</textPath></text>",
            text_fill,
            label_id,
            fmt_num(sector.label.start_offset * 100.0),
            sector.label.text,
        );
        let _ = write!(
            out,
            "<path d=\"{}\" stroke=\"{}\" fill=\"none\"/>",
            tick_path(&sector.boundary_tick),
            theme.foreground,
        );

        let (cx, cy) = sector.count_circle.center.to_cartesian();
        let _ = write!(
            out,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            fmt_num(cx),
            fmt_num(cy),
            fmt_num(sector.count_circle.radius),
            theme.sector(sector.count_circle.fill),
        );
        if let Some(total) = sector.count_circle.label {
            let _ = write!(
                out,
                "<text x=\"{}\" y=\"{}\" dy=\"1\" font-size=\"8\" text-anchor=\"middle\" \
                 dominant-baseline=\"middle\" fill=\"{}\">{}</text>",
                fmt_num(cx),
                fmt_num(cy),
                text_fill,
                total,
            );
        }

        for marks in &sector.records {
            for line in &marks.lines {
                let _ = write!(
                    out,
                    "<path d=\"{}\" stroke=\"{}\" stroke-dasharray=\"{}\" stroke-width=\"1\" fill=\"none\"/>",
                    line_path(line.near, line.far),
                    theme.stroke(line.tone),
                    line.dash.as_svg(),
                );
            }
            let glyph = &marks.glyph;
            let anchor_tone = marks.lines[0].tone;
            let (gx, gy) = glyph.position.to_cartesian();
            let _ = write!(
                out,
                "<path d=\"{}\" fill=\"{}\" transform=\"translate({},{}) rotate({})\"/>",
                square_path(&glyph.square),
                theme.stroke(anchor_tone),
                fmt_num(gx),
                fmt_num(gy),
                fmt_num(glyph.rotation_degrees),
            );
            if !glyph.staffing_arcs.is_empty() {
                let _ = write!(
                    out,
                    "<g transform=\"translate({},{}) rotate({})\">",
                    fmt_num(gx),
                    fmt_num(gy),
                    fmt_num(glyph.arc_rotation_degrees),
                );
                for arc in &glyph.staffing_arcs {
                    let _ = write!(
                        out,
                        "<path d=\"{}\" fill=\"{}\"/>",
                        sector_path(arc),
                        theme.stroke(anchor_tone),
                    );
                }
                out.push_str("</g>");
            }
        }
    }

    // panel over the rings' start edge so the scale reads straight-edged
    if half.half == Half::Top {
        let _ = write!(
            out,
            "<rect x=\"{}\" y=\"{}\" width=\"15\" height=\"{}\" fill=\"{}\"/>",
            fmt_num(12.0 + cfg.margins.right),
            fmt_num(-cfg.circle_radius()),
            fmt_num(cfg.scale_span() + cfg.arc_width * 2.0),
            theme.background,
        );
    }

    let _ = write!(
        out,
        "<path d=\"{}\" stroke=\"{}\" fill=\"none\"/>",
        tick_path(&half.start_tick),
        theme.foreground,
    );

    // scale value labels, top half only; the bottom shares the same scale
    if half.half == Half::Top {
        let step = cfg.scale_span() / 10.0;
        for (i, ring) in half.rings.iter().enumerate() {
            let value = ((1.0 - ring.value) * 100.0).round();
            let fill = match ring.tone {
                RingTone::Transparent => theme.foreground.as_str(),
                tone => theme.ring(tone),
            };
            let _ = write!(
                out,
                "<text x=\"28\" y=\"{}\" font-size=\"6\" text-anchor=\"middle\" \
                 dominant-baseline=\"middle\" fill=\"{}\">{}</text>",
                fmt_num(cfg.margins.top - cfg.circle_radius() + i as f64 * step),
                fill,
                fmt_num(value),
            );
        }
    }

    out.push_str("</g>");
}

fn write_wrapped(
    out: &mut String,
    text: &girone_layout::WrappedText,
    font_size: f64,
    fill: &str,
    anchor: &str,
    weight: Option<u32>,
) {
    let _ = write!(
        out,
        "<text font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\"",
        fmt_num(font_size),
        fill,
        anchor,
    );
    if let Some(weight) = weight {
        let _ = write!(out, " font-weight=\"{weight}\"");
    }
    out.push('>');
    for (line, dy) in text.lines.iter().zip(text.baseline_offsets()) {
        let _ = write!(out, "<tspan x=\"0\" dy=\"{}em\">{}</tspan>", fmt_num(dy), line);
    }
    out.push_str("</text>");
}

fn write_legend(out: &mut String, legend: &Legend, theme: &Theme) {
    out.push_str("<g transform=\"translate(0,280)\">");
    let _ = write!(
        out,
        "<text font-size=\"12\" fill=\"{}\">{}</text>",
        theme.foreground, legend.title,
    );

    group_translate(out, legend.circle_origin);
    for circle in &legend.circles {
        let _ = write!(
            out,
            "<circle cy=\"{}\" r=\"{}\" fill=\"transparent\" stroke=\"{}\" stroke-width=\"0.5\"/>",
            fmt_num(circle.cy),
            fmt_num(circle.radius),
            theme.foreground,
        );
        let _ = write!(
            out,
            "<text y=\"{}\" font-size=\"4\" text-anchor=\"middle\" fill=\"{}\">{}</text>",
            fmt_num(circle.label_y),
            theme.foreground,
            circle.label,
        );
    }
    for note in &legend.annotations {
        let _ = write!(out, "<g transform=\"translate(0,{})\">", fmt_num(note.y));
        if let Some((x0, x1)) = note.leader {
            let _ = write!(
                out,
                "<line x1=\"{}\" x2=\"{}\" stroke=\"black\" stroke-width=\"0.5\"/>",
                fmt_num(x0),
                fmt_num(x1),
            );
        }
        let _ = write!(
            out,
            "<g transform=\"translate({},{})\">",
            fmt_num(note.text_x),
            fmt_num(note.dy),
        );
        write_wrapped(out, &note.text, note.font_size, &theme.foreground, "start", None);
        out.push_str("</g></g>");
    }
    out.push_str("</g>");

    for (i, sample) in legend.sample_lines.iter().enumerate() {
        let _ = write!(
            out,
            "<g transform=\"translate(0,{})\">",
            fmt_num(70.0 + i as f64 * 18.0)
        );
        write_wrapped(out, &sample.caption, 6.0, &theme.foreground, "start", None);
        let _ = write!(
            out,
            "<line x1=\"{}\" x2=\"{}\" y1=\"7.5\" y2=\"7.5\" stroke=\"{}\" \
             stroke-dasharray=\"{}\" stroke-width=\"1\"/>",
            fmt_num(sample.x),
            fmt_num(sample.x + sample.length),
            theme.stroke(sample.tone),
            sample.dash.as_svg(),
        );
        out.push_str("</g>");
    }

    let staffing = &legend.staffing;
    group_translate(out, staffing.origin);
    let _ = write!(
        out,
        "<g transform=\"translate({},{})\">",
        fmt_num(staffing.title_offset.0),
        fmt_num(staffing.title_offset.1),
    );
    write_wrapped(out, &staffing.title, 6.0, &theme.foreground, "middle", None);
    out.push_str("</g>");
    let _ = write!(
        out,
        "<path d=\"{}\" fill=\"{}\"/>",
        square_path(&staffing.square),
        theme.foreground,
    );
    for arc in &staffing.arcs {
        let _ = write!(
            out,
            "<path d=\"{}\" fill=\"{}\"/>",
            sector_path(arc),
            theme.foreground,
        );
    }
    for bracket in &staffing.brackets {
        let mut d = String::new();
        for (i, (x, y)) in bracket.points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{}{},{}", cmd, fmt_num(*x), fmt_num(*y));
        }
        let _ = write!(
            out,
            "<path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"0.75\"/>",
            d,
        );
        let tall = if bracket.x == 0.0 { 20.0 } else { 0.0 };
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"6\" text-anchor=\"middle\" \
             text-decoration=\"underline\" fill=\"{}\">{}</text>",
            fmt_num(bracket.x),
            fmt_num(-26.0 - tall),
            theme.foreground,
            bracket.title,
        );
        let _ = write!(
            out,
            "<text x=\"{}\" y=\"{}\" font-size=\"6\" text-anchor=\"middle\" fill=\"{}\">{}</text>",
            fmt_num(bracket.x),
            fmt_num(-18.0 - tall),
            theme.foreground,
            bracket.label,
        );
    }
    out.push_str("</g>");

    out.push_str("</g>");
}
