//! End-to-end tests driving `render_paths`.

use insta::assert_snapshot;
use interpath::{
    Aesthetic, Arrow, ArrowEnds, AttrValue, DrawBackend, GroupingAdvisory, PathError, PathRow,
    PathTable, PolylineBatch, Primitive, Rgba, SegmentBatch, StrokeParams, interpolate,
    render_paths,
};
use miette::Diagnostic;

fn table(aes: &[Aesthetic], rows: Vec<PathRow>) -> PathTable {
    PathTable::from_rows(aes.to_vec(), rows).unwrap()
}

fn render(t: &PathTable) -> String {
    render_paths(t, &StrokeParams::default())
        .unwrap()
        .result
        .to_string()
}

#[test]
fn constant_group_draws_one_polyline() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Linetype],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red").with("solid"),
            PathRow::new(1, 1.0, 1.0).with("red").with("solid"),
            PathRow::new(1, 2.0, 0.0).with("red").with("solid"),
        ],
    );
    assert_snapshot!(render(&t), @r"
    polylines (1 paths, 3 points)
      path 0 group=1 colour=#ff0000 width=1.42 linetype=solid: (0, 0) (1, 1) (2, 0)
    ");
}

#[test]
fn placeholder_between_equal_anchors_keeps_one_polyline() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Linetype],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red").with("solid"),
            PathRow::new(1, 1.0, 1.0)
                .placeholder()
                .with(None::<&str>)
                .with("solid"),
            PathRow::new(1, 2.0, 0.0).with("red").with("solid"),
        ],
    );
    let resolved = interpolate(&t).unwrap();
    let colours = &resolved.column(&Aesthetic::Colour).unwrap().values;
    assert!(colours.iter().all(|v| v.as_colour() == Some(Rgba::rgb(255, 0, 0))));
    assert_snapshot!(render(&t), @r"
    polylines (1 paths, 3 points)
      path 0 group=1 colour=#ff0000 width=1.42 linetype=solid: (0, 0) (1, 1) (2, 0)
    ");
}

#[test]
fn varying_solid_group_draws_segments_with_start_style() {
    let t = table(
        &[Aesthetic::Colour],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red"),
            PathRow::new(1, 1.0, 0.0).placeholder().with(None::<&str>),
            PathRow::new(1, 2.0, 0.0).with("blue"),
        ],
    );
    assert_snapshot!(render(&t), @r"
    segments (2)
      (0, 0) -> (1, 0) colour=#ff0000 width=1.42 linetype=solid
      (1, 0) -> (2, 0) colour=#800080 width=1.42 linetype=solid
    ");
}

#[test]
fn linewidth_is_interpolated_and_scaled_to_points() {
    let t = table(
        &[Aesthetic::Linewidth],
        vec![
            PathRow::new("a", 0.0, 0.0).with(1.0),
            PathRow::new("a", 1.0, 0.0).placeholder().with(None::<f64>),
            PathRow::new("a", 2.0, 0.0).with(3.0),
        ],
    );
    assert_snapshot!(render(&t), @r"
    segments (2)
      (0, 0) -> (1, 0) colour=#000000 width=2.85 linetype=solid
      (1, 0) -> (2, 0) colour=#000000 width=5.69 linetype=solid
    ");
}

#[test]
fn segment_count_is_rows_minus_one_per_group() {
    let mut rows = Vec::new();
    for (group, n) in [(1, 4), (2, 2), (3, 5)] {
        for i in 0..n {
            rows.push(PathRow::new(group, i as f64, group as f64).with(i as f64));
        }
    }
    let t = table(&[Aesthetic::Alpha], rows);
    let out = render_paths(&t, &StrokeParams::default()).unwrap();
    let batch = out.result.as_segments().unwrap();
    assert_eq!(batch.segments.len(), 3 + 1 + 4);
    assert_eq!(out.result.point_count(), 16);
}

#[test]
fn arrow_heads_only_at_path_ends() {
    let t = table(
        &[Aesthetic::Linewidth],
        vec![
            PathRow::new(1, 0.0, 0.0).with(1.0),
            PathRow::new(1, 1.0, 0.0).with(2.0),
            PathRow::new(1, 2.0, 0.0).with(3.0),
            PathRow::new(2, 0.0, 1.0).with(1.0),
            PathRow::new(2, 1.0, 1.0).with(1.0),
        ],
    );
    let stroke = StrokeParams::default().with_arrow(Arrow {
        ends: ArrowEnds::Both,
        ..Default::default()
    });
    let out = render_paths(&t, &stroke).unwrap();
    assert_snapshot!(out.result.to_string(), @r"
    segments (3)
      (0, 0) -> (1, 0) colour=#000000 width=2.85 linetype=solid arrow=first
      (1, 0) -> (2, 0) colour=#000000 width=5.69 linetype=solid arrow=last
      (0, 1) -> (1, 1) colour=#000000 width=2.85 linetype=solid arrow=both
    ");
}

#[test]
fn groups_are_drawn_in_sorted_order() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Linetype],
        vec![
            PathRow::new("b", 0.0, 0.0).with("blue").with("dashed"),
            PathRow::new("a", 5.0, 5.0).with("red").with("dotted"),
            PathRow::new("b", 1.0, 1.0).with("blue").with("dashed"),
            PathRow::new("a", 6.0, 6.0).with("red").with("dotted"),
        ],
    );
    assert_snapshot!(render(&t), @r"
    polylines (2 paths, 4 points)
      path 0 group=a colour=#ff0000 width=1.42 linetype=dotted: (5, 5) (6, 6)
      path 1 group=b colour=#0000ff width=1.42 linetype=dashed: (0, 0) (1, 1)
    ");
}

#[test]
fn varying_dashed_group_is_rejected() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Linetype],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red").with("dashed"),
            PathRow::new(1, 1.0, 0.0).with("blue").with("dashed"),
        ],
    );
    let err = render_paths(&t, &StrokeParams::default()).unwrap_err();
    assert_eq!(
        err,
        PathError::InconsistentStyling {
            group: 1.into(),
            varying: vec![Aesthetic::Colour],
        }
    );
    assert_eq!(
        err.to_string(),
        "group 1 varies in colour along the path while its linetype isn't solid"
    );
    assert_eq!(
        err.code().map(|c| c.to_string()).as_deref(),
        Some("interpath::render::inconsistent_styling")
    );
}

#[test]
fn second_group_varying_while_dashed_is_rejected() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Linetype],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red").with("dashed"),
            PathRow::new(1, 1.0, 0.0).with("red").with("dashed"),
            PathRow::new(2, 0.0, 1.0).with("red").with("dashed"),
            PathRow::new(2, 1.0, 1.0).with("blue").with("dashed"),
        ],
    );
    assert_eq!(
        render_paths(&t, &StrokeParams::default()),
        Err(PathError::InconsistentStyling {
            group: 2.into(),
            varying: vec![Aesthetic::Colour],
        })
    );
}

#[test]
fn fractional_linetype_is_not_treated_as_solid() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Linetype],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red").with(1.5),
            PathRow::new(1, 1.0, 0.0).with("blue").with(1.5),
        ],
    );
    assert_eq!(
        render_paths(&t, &StrokeParams::default()),
        Err(PathError::InconsistentStyling {
            group: 1.into(),
            varying: vec![Aesthetic::Colour],
        })
    );
}

#[test]
fn tweened_numeric_linetype_is_rejected() {
    let t = table(
        &[Aesthetic::Linetype],
        vec![
            PathRow::new(1, 0.0, 0.0).with(1.0),
            PathRow::new(1, 1.0, 0.0).placeholder().with(None::<f64>),
            PathRow::new(1, 2.0, 0.0).with(2.0),
        ],
    );
    assert_eq!(
        render_paths(&t, &StrokeParams::default()),
        Err(PathError::InconsistentStyling {
            group: 1.into(),
            varying: vec![Aesthetic::Linetype],
        })
    );
}

#[test]
fn single_point_draws_nothing_and_advises() {
    let t = table(&[], vec![PathRow::new(1, 0.0, 0.0)]);
    let out = render_paths(&t, &StrokeParams::default()).unwrap();
    assert!(out.result.is_empty());
    assert_eq!(out.notices, vec![GroupingAdvisory { groups: 1 }]);
    assert_snapshot!(out.result.to_string(), @"empty");
}

#[test]
fn singleton_groups_advise_but_larger_groups_still_draw() {
    let t = table(
        &[],
        vec![
            PathRow::new(1, 0.0, 0.0),
            PathRow::new(1, 1.0, 0.0),
            PathRow::new(2, 5.0, 5.0),
        ],
    );
    let out = render_paths(&t, &StrokeParams::default()).unwrap();
    assert!(out.notices.is_empty());
    assert_snapshot!(out.result.to_string(), @r"
    polylines (1 paths, 2 points)
      path 0 group=1 colour=#000000 width=1.42 linetype=solid: (0, 0) (1, 0)
    ");
}

#[test]
fn missing_group_column_is_fatal() {
    let t = table(
        &[],
        vec![PathRow::new(1, 0.0, 0.0), PathRow::ungrouped(1.0, 1.0)],
    );
    assert_eq!(
        render_paths(&t, &StrokeParams::default()),
        Err(PathError::MissingGroupColumn)
    );
}

#[test]
fn group_without_anchor_is_fatal() {
    let t = table(
        &[Aesthetic::Linewidth],
        vec![
            PathRow::new(1, 0.0, 0.0).with(1.0),
            PathRow::new(1, 1.0, 0.0).with(1.0),
            PathRow::new(2, 0.0, 1.0).placeholder().with(None::<f64>),
            PathRow::new(2, 1.0, 1.0).placeholder().with(None::<f64>),
        ],
    );
    assert_eq!(
        render_paths(&t, &StrokeParams::default()),
        Err(PathError::UnresolvableGroup {
            group: 2.into(),
            column: Aesthetic::Linewidth,
        })
    );
}

#[test]
fn pinned_placeholders_pass_through() {
    let t = table(
        &[Aesthetic::Linewidth],
        vec![
            PathRow::new(1, 0.0, 0.0).with(1.0),
            PathRow::new(1, 1.0, 0.0).placeholder().with(5.0),
            PathRow::new(1, 2.0, 0.0).placeholder().with(5.0),
            PathRow::new(1, 3.0, 0.0).with(3.0),
        ],
    );
    let resolved = interpolate(&t).unwrap();
    assert_eq!(
        resolved.column(&Aesthetic::Linewidth).unwrap().values,
        [1.0, 5.0, 5.0, 3.0].map(AttrValue::Number).to_vec()
    );
}

#[test]
fn single_anchor_is_broadcast() {
    let t = table(
        &[Aesthetic::Colour],
        vec![
            PathRow::new(1, 0.0, 0.0).placeholder().with(None::<&str>),
            PathRow::new(1, 1.0, 0.0).with("green"),
            PathRow::new(1, 2.0, 0.0).placeholder().with(None::<&str>),
        ],
    );
    assert_snapshot!(render(&t), @r"
    polylines (1 paths, 3 points)
      path 0 group=1 colour=#008000 width=1.42 linetype=solid: (0, 0) (1, 0) (2, 0)
    ");
}

#[test]
fn non_finite_ends_are_trimmed() {
    let t = table(
        &[],
        vec![
            PathRow::new(1, f64::NAN, 0.0),
            PathRow::new(1, 1.0, 0.0),
            PathRow::new(1, 2.0, 0.0),
            PathRow::new(1, 3.0, f64::INFINITY),
        ],
    );
    assert_snapshot!(render(&t), @r"
    polylines (1 paths, 2 points)
      path 0 group=1 colour=#000000 width=1.42 linetype=solid: (1, 0) (2, 0)
    ");
}

/// Collects composited colours the way a device would see them.
#[derive(Default)]
struct Device {
    strokes: Vec<(usize, Option<Rgba>)>,
}

impl DrawBackend for Device {
    fn draw_segments(&mut self, batch: &SegmentBatch) {
        for seg in &batch.segments {
            self.strokes.push((2, seg.style.composited()));
        }
    }

    fn draw_polylines(&mut self, batch: &PolylineBatch) {
        for (id, points) in batch.paths() {
            self.strokes.push((points.len(), batch.styles[id].composited()));
        }
    }
}

#[test]
fn backend_receives_composited_colours() {
    let t = table(
        &[Aesthetic::Colour, Aesthetic::Alpha],
        vec![
            PathRow::new(1, 0.0, 0.0).with("red").with(0.5),
            PathRow::new(1, 1.0, 0.0).with("red").with(0.5),
            PathRow::new(2, 0.0, 1.0).with(None::<&str>).with(1.0),
            PathRow::new(2, 1.0, 1.0).with(None::<&str>).with(1.0),
        ],
    );
    let out = render_paths(&t, &StrokeParams::default()).unwrap();
    let mut device = Device::default();
    out.result.submit(&mut device);
    assert_eq!(
        device.strokes,
        vec![(2, Some(Rgba::rgba(255, 0, 0, 128))), (2, None)]
    );
}
