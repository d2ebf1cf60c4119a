mod support;

use chart_tick::axis::FormatRange;
use chart_tick::core::{AxisValue, Coords};
use chart_tick::render::{ElementKind, RecordingSurface, SurfaceCall};
use chart_tick::tick::{TickFactory, TickFactoryOptions, axis_grid_line};
use support::{FakeAxis, creates_of_paths, creates_of_texts, factory, visible_options};

#[test]
fn end_to_end_tick_draws_mark_grid_and_label() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);

    tick.init_coords(&axis);
    assert_eq!(tick.coords(), Some(Coords::new(100.0, 50.0)));
    assert_eq!(tick.label_coords(), Some(Coords::new(100.0, 60.0)));

    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
    tick.draw_label(&axis, &mut surface, &FormatRange::default());

    let mark = tick.mark().expect("mark");
    let grid = tick.grid().expect("grid");
    let label = tick.label().expect("label");

    let label_element = surface.element(label).expect("label element");
    assert_eq!(label_element.attrs.text.as_deref(), Some("10"));
    assert_eq!(label_element.parent, Some(axis.groups.elements));
    assert_eq!(
        surface.element(mark).expect("mark element").parent,
        Some(axis.groups.line)
    );
    assert_eq!(
        surface.element(grid).expect("grid element").parent,
        Some(axis.groups.grid)
    );

    let frame = surface.frame();
    assert_eq!(frame.lines.len(), 2);
    let text = frame.text("10").expect("label text");
    assert_eq!((text.x, text.y), (100.0, 60.0));

    // Skip does not retract primitives that already exist.
    tick.set_skipped_category(Some(AxisValue::number(10.0)));
    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
    assert_eq!(tick.mark(), Some(mark));
    assert_eq!(tick.grid(), Some(grid));
    assert!(surface.is_live(mark));
    assert!(surface.is_live(grid));
}

#[test]
fn repeated_draws_do_not_duplicate_primitives() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);

    for _ in 0..2 {
        tick.draw_mark(&axis, &mut surface);
        tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
        tick.draw_label(&axis, &mut surface, &FormatRange::default());
    }
    let first = surface.frame();

    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
    tick.draw_label(&axis, &mut surface, &FormatRange::default());

    assert_eq!(creates_of_paths(&surface), 2);
    assert_eq!(creates_of_texts(&surface), 1);
    assert_eq!(surface.live_count(ElementKind::Path), 2);
    assert_eq!(surface.live_count(ElementKind::Text), 1);
    assert_eq!(surface.frame(), first);
}

#[test]
fn skipped_value_creates_nothing_until_skip_is_cleared() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = TickFactory::new(
        &axis,
        TickFactoryOptions {
            skipped_category: Some(AxisValue::number(10.0)),
            ..visible_options()
        },
    )
    .expect("factory");
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);

    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
    assert!(tick.mark().is_none());
    assert!(tick.grid().is_none());
    assert_eq!(creates_of_paths(&surface), 0);

    tick.set_skipped_category(Some(AxisValue::number(20.0)));
    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
    assert!(tick.mark().is_some());
    assert!(tick.grid().is_some());
}

#[test]
fn skipped_category_is_shared_by_sibling_ticks() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let first = factory.create(10.0);
    let mut second = factory.create(20.0);
    second.init_coords(&axis);

    first.set_skipped_category(Some(AxisValue::number(20.0)));
    assert_eq!(
        factory.skipped_category().get(),
        Some(AxisValue::number(20.0))
    );

    second.draw_mark(&axis, &mut surface);
    assert!(second.mark().is_none());

    factory.skipped_category().set(None);
    second.draw_mark(&axis, &mut surface);
    assert!(second.mark().is_some());
}

#[test]
fn other_factories_keep_their_own_skip_policy() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let skipping = factory(&axis);
    let plain = factory(&axis);

    skipping
        .create(10.0)
        .set_skipped_category(Some(AxisValue::number(10.0)));

    let mut tick = plain.create(10.0);
    tick.init_coords(&axis);
    tick.draw_mark(&axis, &mut surface);
    assert!(tick.mark().is_some());
}

#[test]
fn category_skip_matches_by_value() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let tick = factory.create("Q1");

    tick.set_skipped_category(Some(AxisValue::category("Q2")));
    assert!(!factory.skipped_category().matches(tick.value()));
    tick.set_skipped_category(Some(AxisValue::category("Q1")));
    assert!(factory.skipped_category().matches(tick.value()));
}

#[test]
fn default_options_draw_marks_but_not_grid_lines() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = TickFactory::new(&axis, TickFactoryOptions::default()).expect("factory");
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);

    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));

    assert!(tick.mark().is_some());
    assert!(tick.grid().is_none());
}

#[test]
fn hidden_tick_marks_are_never_created() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let mut options = visible_options();
    options.tick.visible = false;
    let factory = TickFactory::new(&axis, options).expect("factory");
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);

    tick.draw_mark(&axis, &mut surface);
    tick.update_tick_position(&axis, &mut surface, true);

    assert!(tick.mark().is_none());
    assert_eq!(creates_of_paths(&surface), 0);
}

#[test]
fn draws_without_coordinates_do_nothing() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);
    let before = surface.calls().len();

    tick.draw_mark(&axis, &mut surface);
    tick.update_tick_position(&axis, &mut surface, true);
    tick.update_grid_position(&axis, &mut surface, true);
    tick.update_label_position(&axis, &mut surface, true);

    assert!(tick.mark().is_none());
    assert_eq!(surface.calls().len(), before);
}

#[test]
fn out_of_extent_mark_is_not_created() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(500.0);
    tick.init_coords(&axis);

    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));

    assert!(tick.mark().is_none());
    assert!(tick.grid().is_none());
}

#[test]
fn grid_callback_receives_tick_view_and_style() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);

    let mut seen = None;
    tick.draw_grid(&axis, &mut surface, |view, style, surface| {
        seen = Some((view.value.clone(), view.coords, *style));
        Some(surface.create_path(style))
    });

    let (value, coords, style) = seen.expect("callback invoked");
    assert_eq!(value, AxisValue::number(10.0));
    assert_eq!(coords, Some(Coords::new(100.0, 50.0)));
    assert_eq!(style, visible_options().grid.path_style());
    assert!(tick.grid().is_some());
}

#[test]
fn grid_callback_returning_none_leaves_no_grid() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);

    tick.draw_grid(&axis, &mut surface, |_, _, _| None);
    assert!(tick.grid().is_none());
}

#[test]
fn factory_offset_falls_back_to_axis_default() {
    let mut surface = RecordingSurface::default();
    let mut axis = FakeAxis::new(&mut surface);

    let explicit = TickFactory::new(
        &axis,
        TickFactoryOptions {
            offset: Some(0.25),
            ..visible_options()
        },
    )
    .expect("factory");
    assert_eq!(explicit.tick_offset(), Some(0.25));

    axis.tick_offset = Some(0.5);
    let inherited = factory(&axis);
    assert_eq!(inherited.tick_offset(), Some(0.5));

    let zero = TickFactory::new(
        &axis,
        TickFactoryOptions {
            offset: Some(0.0),
            ..visible_options()
        },
    )
    .expect("factory");
    assert_eq!(zero.tick_offset(), Some(0.5));

    axis.tick_offset = None;
    let none = factory(&axis);
    assert_eq!(none.tick_offset(), None);

    let mut tick = none.create(10.0);
    tick.init_coords(&axis);
    // Without an offset the fake axis places marks at the label row.
    assert_eq!(tick.coords(), Some(Coords::new(100.0, 60.0)));
}

#[test]
fn update_value_takes_effect_on_next_init_coords() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);
    tick.save_coords();

    tick.update_value(20.0);
    assert_eq!(tick.value(), &AxisValue::number(20.0));
    assert_eq!(tick.coords(), Some(Coords::new(100.0, 50.0)));

    tick.init_coords(&axis);
    assert_eq!(tick.coords(), Some(Coords::new(200.0, 50.0)));
    assert_eq!(tick.stored_coords(), Some(Coords::new(100.0, 50.0)));
}

#[test]
fn dispose_removes_every_owned_element() {
    let mut surface = RecordingSurface::default();
    let axis = FakeAxis::new(&mut surface);
    let factory = factory(&axis);
    let mut tick = factory.create(10.0);
    tick.init_coords(&axis);
    tick.draw_mark(&axis, &mut surface);
    tick.draw_grid(&axis, &mut surface, axis_grid_line(&axis));
    tick.draw_label(&axis, &mut surface, &FormatRange::default());
    tick.update_label_position(&axis, &mut surface, true);

    tick.dispose(&mut surface);

    assert!(tick.mark().is_none());
    assert!(tick.grid().is_none());
    assert!(tick.label().is_none());
    assert_eq!(surface.live_count(ElementKind::Path), 0);
    assert_eq!(surface.live_count(ElementKind::Text), 0);
    // Axis groups plus nothing else remain.
    assert_eq!(surface.live_count(ElementKind::Group), 4);
    assert!(surface.frame().is_empty());

    let removes = surface
        .calls()
        .iter()
        .filter(|call| matches!(call, SurfaceCall::Remove { .. }))
        .count();
    tick.dispose(&mut surface);
    let removes_after = surface
        .calls()
        .iter()
        .filter(|call| matches!(call, SurfaceCall::Remove { .. }))
        .count();
    assert_eq!(removes, removes_after);
}
