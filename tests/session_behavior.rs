use egui::{Color32, pos2};
use sketchpad::{CanvasSession, DrawingSink, SessionConfig, StrokeState};

fn small_session() -> CanvasSession {
    CanvasSession::new(SessionConfig {
        width: 80,
        height: 60,
        ..SessionConfig::default()
    })
    .unwrap()
}

fn assert_blank(session: &CanvasSession) {
    let buffer = session.canvas().buffer();
    for y in 0..buffer.height() {
        for x in 0..buffer.width() {
            assert_eq!(buffer.pixel(x, y), Some(Color32::WHITE), "pixel ({x}, {y})");
        }
    }
    assert_surfaces_match(session);
}

fn assert_surfaces_match(session: &CanvasSession) {
    let canvas = session.canvas();
    assert_eq!(canvas.display().size(), canvas.size());
    let [width, height] = canvas.size();
    for y in 0..height {
        for x in 0..width {
            assert_eq!(
                canvas.display().pixel(x, y),
                canvas.buffer().pixel(x, y),
                "pixel ({x}, {y})"
            );
        }
    }
}

#[test]
fn test_new_session_is_blank_and_idle() {
    let session = small_session();
    assert_eq!(session.canvas().size(), [80, 60]);
    assert_eq!(session.canvas().display().size(), [80, 60]);
    assert_eq!(session.stroke_state(), StrokeState::Idle);
    assert_blank(&session);
}

#[test]
fn test_display_and_buffer_show_identical_pixels() {
    let mut session = small_session();
    session.choose_color(Some(Color32::from_rgb(200, 30, 90)));
    session.set_brush_width(5);

    let points = [pos2(5.0, 5.0), pos2(20.0, 8.0), pos2(40.0, 30.0), pos2(70.0, 50.0)];
    let drawn: Vec<_> = points
        .iter()
        .filter_map(|p| session.on_pointer_drag(*p))
        .collect();

    assert_eq!(drawn.len(), points.len() - 1);
    assert_surfaces_match(&session);
    for segment in &drawn {
        assert_eq!(segment.width(), 5);
        for end in [segment.start(), segment.end()] {
            assert_eq!(session.canvas().sample(end).unwrap(), segment.color());
        }
    }
    // Width reaches the buffer too: two pixels off the first segment's start
    assert_eq!(
        session.canvas().sample(pos2(5.0, 7.0)).unwrap(),
        Color32::from_rgb(200, 30, 90)
    );
}

#[test]
fn test_release_starts_a_fresh_stroke() {
    let mut session = small_session();
    session.on_pointer_drag(pos2(10.0, 10.0));
    assert!(session.on_pointer_drag(pos2(20.0, 10.0)).is_some());

    session.on_pointer_release();
    assert_eq!(session.stroke_state(), StrokeState::Idle);

    // First drag after release only records the position
    assert!(session.on_pointer_drag(pos2(10.0, 40.0)).is_none());
    assert_eq!(session.canvas().display().pixel(10, 40), Some(Color32::WHITE));

    let segment = session.on_pointer_drag(pos2(30.0, 40.0)).unwrap();
    assert_eq!(segment.start(), pos2(10.0, 40.0));
    assert_eq!(session.canvas().display().pixel(20, 40), Some(Color32::BLACK));
    assert_surfaces_match(&session);
    // Nothing connects the pre-release point to the new stroke
    assert_eq!(session.canvas().sample(pos2(15.0, 25.0)).unwrap(), Color32::WHITE);
}

#[test]
fn test_eyedropper_picks_drawn_color() {
    let mut session = small_session();
    let color = Color32::from_rgb(12, 200, 150);
    session.choose_color(Some(color));
    session.on_pointer_drag(pos2(10.0, 20.0));
    session.on_pointer_drag(pos2(50.0, 20.0));

    session.choose_color(Some(Color32::BLACK));
    assert_eq!(session.pick_color(pos2(30.0, 20.0)).unwrap(), color);
    assert_eq!(session.tools().color(), color);
    assert_eq!(session.tools().previous_color(), Some(Color32::BLACK));
}

#[test]
fn test_eyedropper_rejects_out_of_bounds() {
    let mut session = small_session();
    session.choose_color(Some(Color32::RED));
    assert!(session.pick_color(pos2(80.0, 10.0)).is_err());
    assert!(session.pick_color(pos2(-1.0, 10.0)).is_err());
    assert_eq!(session.tools().color(), Color32::RED);
}

#[test]
fn test_eraser_paints_background() {
    let mut session = small_session();
    session.set_brush_width(10);
    session.on_pointer_drag(pos2(10.0, 30.0));
    session.on_pointer_drag(pos2(70.0, 30.0));
    session.on_pointer_release();
    assert_eq!(session.canvas().sample(pos2(40.0, 30.0)).unwrap(), Color32::BLACK);

    session.use_eraser();
    session.on_pointer_drag(pos2(40.0, 10.0));
    session.on_pointer_drag(pos2(40.0, 50.0));
    assert_eq!(session.canvas().sample(pos2(40.0, 30.0)).unwrap(), Color32::WHITE);
    assert_eq!(session.canvas().sample(pos2(20.0, 30.0)).unwrap(), Color32::BLACK);
}

#[test]
fn test_cancelled_color_prompt_is_a_no_op() {
    let mut session = small_session();
    session.choose_color(Some(Color32::BLUE));
    assert!(!session.choose_color(None));
    assert_eq!(session.tools().color(), Color32::BLUE);
}

#[test]
fn test_clear_is_idempotent_and_keeps_size() {
    let mut session = small_session();
    session.resize(Some(50), Some(40));
    session.on_pointer_drag(pos2(1.0, 1.0));
    session.on_pointer_drag(pos2(45.0, 35.0));

    session.clear();
    assert_eq!(session.canvas().size(), [50, 40]);
    assert_blank(&session);
    session.clear();
    assert_eq!(session.canvas().size(), [50, 40]);
    assert_blank(&session);
}

#[test]
fn test_resize_discards_content() {
    let mut session = small_session();
    session.set_brush_width(10);
    session.on_pointer_drag(pos2(0.0, 0.0));
    session.on_pointer_drag(pos2(79.0, 59.0));

    assert!(session.resize(Some(120), Some(90)));
    assert_eq!(session.canvas().size(), [120, 90]);
    assert_eq!(session.canvas().display().size(), [120, 90]);
    assert_blank(&session);
}

#[test]
fn test_incomplete_resize_is_a_no_op() {
    let mut session = small_session();
    session.on_pointer_drag(pos2(10.0, 10.0));
    session.on_pointer_drag(pos2(20.0, 10.0));

    assert!(!session.resize(None, Some(100)));
    assert!(!session.resize(Some(100), None));
    assert!(!session.resize(Some(0), Some(100)));
    assert_eq!(session.canvas().size(), [80, 60]);
    assert_eq!(session.canvas().sample(pos2(15.0, 10.0)).unwrap(), Color32::BLACK);
}

#[test]
fn test_resize_mid_stroke_still_ends_on_release() {
    let mut session = small_session();
    session.on_pointer_drag(pos2(70.0, 50.0));
    session.resize(Some(20), Some(20));

    // The dangling start point is off the new canvas; the segment is clipped
    let segment = session.on_pointer_drag(pos2(5.0, 5.0)).unwrap();
    assert_eq!(segment.start(), pos2(70.0, 50.0));
    assert_eq!(session.canvas().sample(pos2(5.0, 5.0)).unwrap(), Color32::BLACK);

    session.on_pointer_release();
    assert_eq!(session.stroke_state(), StrokeState::Idle);
}

#[test]
fn test_brush_width_is_bounded() {
    let mut session = small_session();
    assert_eq!(session.set_brush_width(0).get(), 1);
    assert_eq!(session.set_brush_width(25).get(), 10);
    assert_eq!(session.set_brush_width(5).get(), 5);
    assert_eq!(session.tools().brush_width().get(), 5);
}
