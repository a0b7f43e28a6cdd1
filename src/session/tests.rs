use super::sequence::WaypointSequence;
use super::*;
use crate::types::{Coordinate, Geometry, WaypointKind};

#[derive(Debug, Default)]
struct RecordingSurface {
    next_handle: u64,
    begun: Vec<DrawKind>,
    cancelled: Vec<DrawHandle>,
    features: Vec<Geometry>,
    clears: usize,
}

impl MapSurface for RecordingSurface {
    fn begin_interactive_draw(&mut self, kind: DrawKind) -> DrawHandle {
        self.next_handle += 1;
        self.begun.push(kind);
        DrawHandle(self.next_handle)
    }

    fn cancel_interactive_draw(&mut self, handle: DrawHandle) {
        self.cancelled.push(handle);
    }

    fn add_feature(&mut self, geometry: Geometry) {
        self.features.push(geometry);
    }

    fn clear_features(&mut self) {
        self.features.clear();
        self.clears += 1;
    }
}

fn c(x: f64, y: f64) -> Coordinate {
    Coordinate::new(x, y)
}

fn line(points: &[(f64, f64)]) -> Geometry {
    Geometry::LineString(points.iter().map(|&(x, y)| c(x, y)).collect())
}

fn ring(points: &[(f64, f64)]) -> Geometry {
    let mut ring: Vec<Coordinate> = points.iter().map(|&(x, y)| c(x, y)).collect();
    if let Some(first) = ring.first().copied() {
        ring.push(first);
    }
    Geometry::Polygon(vec![ring])
}

fn labels(editor: &WaypointEditor) -> Vec<&str> {
    editor.waypoints().iter().map(|w| w.label.as_str()).collect()
}

/// Handle of the draw the surface began most recently.
fn current_handle(surface: &RecordingSurface) -> DrawHandle {
    DrawHandle(surface.next_handle)
}

/// Draw a complete line through `points`, firing a change per click.
fn draw_line(editor: &mut WaypointEditor, surface: &mut RecordingSurface, points: &[(f64, f64)]) {
    editor
        .start_draw(surface, DrawKind::LineString)
        .expect("start line");
    let h = current_handle(surface);
    editor
        .handle_event(surface, GeometryEvent::Started(h, line(&points[..1])))
        .expect("started");
    for n in 1..=points.len() {
        editor
            .handle_event(surface, GeometryEvent::Changed(h, line(&points[..n])))
            .expect("changed");
    }
    editor
        .handle_event(surface, GeometryEvent::Finished(h, line(points)))
        .expect("finished");
}

const FIVE: [(f64, f64); 5] = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0), (4.0, 4.0), (5.0, 5.0)];

#[test]
fn three_click_line_scenario() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(
        &mut editor,
        &mut surface,
        &[(10.0, 20.0), (11.0, 21.0), (12.0, 22.0)],
    );

    let rows: Vec<(String, String)> = editor
        .waypoints()
        .iter()
        .map(|w| (w.label.clone(), w.formatted_coordinate()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("01".to_string(), "(10.00000000, 20.00000000)".to_string()),
            ("02".to_string(), "(11.00000000, 21.00000000)".to_string()),
            ("03".to_string(), "(12.00000000, 22.00000000)".to_string()),
        ]
    );
    assert_eq!(editor.mode(), DrawMode::Idle);
    assert!(editor.modal_open());
    assert_eq!(surface.features.len(), 1);
}

#[test]
fn labels_track_the_live_geometry() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    editor
        .start_draw(&mut surface, DrawKind::LineString)
        .expect("start");
    let h = current_handle(&surface);
    editor
        .handle_event(&mut surface, GeometryEvent::Started(h, line(&[(0.0, 0.0)])))
        .expect("started");

    // A floating last vertex can grow and shrink the run.
    for geometry in [
        line(&[(0.0, 0.0), (0.5, 0.5)]),
        line(&[(0.0, 0.0), (1.0, 1.0), (1.5, 1.5)]),
        line(&[(0.0, 0.0), (1.0, 1.0)]),
    ] {
        let expected = match &geometry {
            Geometry::LineString(points) => points.len(),
            _ => unreachable!(),
        };
        editor
            .handle_event(&mut surface, GeometryEvent::Changed(h, geometry))
            .expect("changed");
        let want: Vec<String> = (1..=expected).map(|i| format!("{i:02}")).collect();
        assert_eq!(labels(&editor), want);
    }
    assert_eq!(editor.mode(), DrawMode::DrawingLineString);
}

#[test]
fn polygon_uses_outer_ring_only() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    editor
        .start_draw(&mut surface, DrawKind::Polygon)
        .expect("start");
    let h = current_handle(&surface);
    let outer = vec![c(0.0, 0.0), c(4.0, 0.0), c(4.0, 4.0), c(0.0, 0.0)];
    let hole = vec![c(1.0, 1.0), c(2.0, 1.0), c(2.0, 2.0), c(1.0, 1.0)];
    let geometry = Geometry::Polygon(vec![outer.clone(), hole]);
    editor
        .handle_event(&mut surface, GeometryEvent::Started(h, geometry.clone()))
        .expect("started");
    editor
        .handle_event(&mut surface, GeometryEvent::Changed(h, geometry))
        .expect("changed");

    let coords: Vec<Coordinate> = editor.waypoints().iter().map(|w| w.coordinate).collect();
    assert_eq!(coords, outer);
    assert_eq!(labels(&editor), ["01", "02", "03", "04"]);
}

#[test]
fn changes_before_start_are_not_tracked() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    editor
        .start_draw(&mut surface, DrawKind::LineString)
        .expect("start");
    let h = current_handle(&surface);
    editor
        .handle_event(&mut surface, GeometryEvent::Changed(h, line(&[(1.0, 1.0)])))
        .expect("changed");
    assert!(editor.waypoints().is_empty());
    assert!(!editor.modal_open());
}

#[test]
fn concurrent_draw_is_rejected_without_side_effects() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE);
    editor
        .start_draw(&mut surface, DrawKind::LineString)
        .expect("start");
    let before = editor.snapshot();

    assert_eq!(
        editor.start_draw(&mut surface, DrawKind::Polygon),
        Err(SessionError::DrawInProgress)
    );
    assert_eq!(
        editor.insert_polygon(&mut surface, 1, InsertPosition::After),
        Err(SessionError::DrawInProgress)
    );
    assert_eq!(editor.snapshot(), before);
    assert_eq!(editor.mode(), DrawMode::DrawingLineString);
    assert_eq!(surface.begun.len(), 2);
}

#[test]
fn insert_after_splices_connector_without_renumbering() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE);

    editor
        .insert_polygon(&mut surface, 2, InsertPosition::After)
        .expect("insert");
    assert_eq!(editor.mode(), DrawMode::DrawingPolygon);
    assert!(editor.insertion_pending());
    let h = current_handle(&surface);
    let polygon = ring(&[(7.0, 8.0), (9.0, 8.0), (9.0, 9.0)]);
    editor
        .handle_event(&mut surface, GeometryEvent::Started(h, polygon.clone()))
        .expect("started");
    editor
        .handle_event(&mut surface, GeometryEvent::Changed(h, polygon.clone()))
        .expect("changed");
    editor
        .handle_event(&mut surface, GeometryEvent::Finished(h, polygon.clone()))
        .expect("finished");

    assert_eq!(labels(&editor), ["01", "02", "03", "P3", "04", "05"]);
    let connector = &editor.waypoints()[3];
    assert_eq!(connector.kind, WaypointKind::PolygonConnector);
    assert_eq!(connector.coordinate, c(7.0, 8.0));
    for (row, (x, y)) in [0usize, 1, 2, 4, 5].into_iter().zip(FIVE) {
        assert_eq!(editor.waypoints()[row].coordinate, c(x, y));
    }
    assert_eq!(editor.mode(), DrawMode::Idle);
    assert!(!editor.insertion_pending());
    assert!(editor.modal_open());
    assert_eq!(surface.features.last(), Some(&polygon));
}

#[test]
fn insert_before_lands_at_the_row() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE[..3]);

    editor
        .insert_polygon(&mut surface, 0, InsertPosition::Before)
        .expect("insert");
    let h = current_handle(&surface);
    editor
        .handle_event(
            &mut surface,
            GeometryEvent::Finished(h, ring(&[(6.0, 6.0), (7.0, 6.0), (7.0, 7.0)])),
        )
        .expect("finished");
    assert_eq!(labels(&editor), ["P1", "01", "02", "03"]);
}

#[test]
fn insert_rejects_out_of_range_index() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE[..2]);
    let before = editor.snapshot();

    assert_eq!(
        editor.insert_polygon(&mut surface, 2, InsertPosition::Before),
        Err(SessionError::InvalidInsertionIndex { index: 2, len: 2 })
    );
    assert_eq!(editor.snapshot(), before);
    assert_eq!(surface.begun.len(), 1);

    let mut empty = WaypointEditor::new();
    assert!(matches!(
        empty.insert_polygon(&mut surface, 0, InsertPosition::After),
        Err(SessionError::InvalidInsertionIndex { index: 0, len: 0 })
    ));
}

#[test]
fn unfinished_insertion_leaves_sequence_alone_until_cancelled() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE[..3]);
    let rows = editor.waypoints().to_vec();

    editor
        .insert_polygon(&mut surface, 1, InsertPosition::After)
        .expect("insert");
    let h = current_handle(&surface);
    editor
        .handle_event(
            &mut surface,
            GeometryEvent::Changed(h, ring(&[(9.0, 9.0), (9.5, 9.0), (9.5, 9.5)])),
        )
        .expect("changed");
    assert_eq!(editor.waypoints(), rows.as_slice());
    assert_eq!(editor.mode(), DrawMode::DrawingPolygon);

    assert!(editor.cancel_draw(&mut surface));
    assert_eq!(surface.cancelled, vec![h]);
    assert_eq!(editor.mode(), DrawMode::Idle);
    assert!(!editor.insertion_pending());

    // A late finish for the abandoned handle must not splice anything.
    editor
        .handle_event(
            &mut surface,
            GeometryEvent::Finished(h, ring(&[(9.0, 9.0), (9.5, 9.0), (9.5, 9.5)])),
        )
        .expect("stale finish");
    assert_eq!(editor.waypoints(), rows.as_slice());
}

#[test]
fn redraw_keeps_connectors_anchored() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE[..3]);
    editor
        .insert_polygon(&mut surface, 1, InsertPosition::After)
        .expect("insert");
    let h = current_handle(&surface);
    editor
        .handle_event(
            &mut surface,
            GeometryEvent::Finished(h, ring(&[(8.0, 8.0), (8.5, 8.0), (8.5, 8.5)])),
        )
        .expect("finished");
    assert_eq!(labels(&editor), ["01", "02", "P2", "03"]);

    // A new line rewrites the vertices; the connector stays behind vertex two.
    draw_line(
        &mut editor,
        &mut surface,
        &[(20.0, 0.0), (21.0, 0.0), (22.0, 0.0), (23.0, 0.0)],
    );
    assert_eq!(labels(&editor), ["01", "02", "P2", "03", "04"]);
    assert_eq!(editor.waypoints()[2].coordinate, c(8.0, 8.0));
    assert_eq!(editor.waypoints()[4].coordinate, c(23.0, 0.0));
}

#[test]
fn unsupported_geometry_is_ignored() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE[..2]);
    editor
        .start_draw(&mut surface, DrawKind::LineString)
        .expect("start");
    let h = current_handle(&surface);
    editor
        .handle_event(&mut surface, GeometryEvent::Started(h, line(&[(0.0, 0.0)])))
        .expect("started");
    let before = editor.waypoints().to_vec();
    assert_eq!(
        editor.handle_event(
            &mut surface,
            GeometryEvent::Changed(h, Geometry::Point(c(3.0, 3.0)))
        ),
        Err(SessionError::UnsupportedGeometry(crate::types::GeometryKind::Point))
    );
    assert_eq!(editor.waypoints(), before.as_slice());
}

#[test]
fn clear_resets_everything() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE);
    editor.toggle_menu(3);
    editor
        .start_draw(&mut surface, DrawKind::Polygon)
        .expect("start");
    let h = current_handle(&surface);

    editor.clear(&mut surface);
    assert!(editor.waypoints().is_empty());
    assert_eq!(editor.mode(), DrawMode::Idle);
    assert!(!editor.modal_open());
    assert_eq!(editor.active_menu_index(), None);
    assert_eq!(surface.cancelled, vec![h]);
    assert!(surface.features.is_empty());
}

#[test]
fn clear_is_idempotent() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    editor.clear(&mut surface);
    let once = editor.snapshot();
    editor.clear(&mut surface);
    assert_eq!(editor.snapshot(), once);
    assert!(!once.modal_open);
    assert!(once.waypoints.is_empty());
    assert!(surface.cancelled.is_empty());
}

#[test]
fn menu_resets_when_its_row_disappears() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    editor
        .start_draw(&mut surface, DrawKind::LineString)
        .expect("start");
    let h = current_handle(&surface);
    editor
        .handle_event(&mut surface, GeometryEvent::Started(h, line(&FIVE[..1])))
        .expect("started");
    editor
        .handle_event(&mut surface, GeometryEvent::Changed(h, line(&FIVE[..4])))
        .expect("changed");
    editor.toggle_menu(3);
    assert_eq!(editor.active_menu_index(), Some(3));

    editor
        .handle_event(&mut surface, GeometryEvent::Changed(h, line(&FIVE[..3])))
        .expect("changed");
    assert_eq!(editor.active_menu_index(), None);
}

#[test]
fn insert_command_closes_the_row_menu() {
    let mut surface = RecordingSurface::default();
    let mut editor = WaypointEditor::new();
    draw_line(&mut editor, &mut surface, &FIVE[..3]);
    editor.toggle_menu(1);
    editor
        .insert_polygon(&mut surface, 1, InsertPosition::Before)
        .expect("insert");
    assert_eq!(editor.active_menu_index(), None);
    editor.close_menu();
    assert_eq!(editor.active_menu_index(), None);
}

#[test]
fn sequence_replace_appends_orphaned_connectors() {
    let mut seq = WaypointSequence::default();
    seq.replace_vertex_run(&[c(0.0, 0.0), c(1.0, 1.0), c(2.0, 2.0)]);
    seq.insert(3, Waypoint::connector("P3".into(), c(9.0, 9.0)))
        .expect("insert at end");
    seq.insert(1, Waypoint::connector("P1".into(), c(8.0, 8.0)))
        .expect("insert inside");
    assert_eq!(seq.len(), 5);

    seq.replace_vertex_run(&[c(5.0, 5.0)]);
    let labels: Vec<&str> = seq.as_slice().iter().map(|w| w.label.as_str()).collect();
    assert_eq!(labels, ["01", "P1", "P3"]);
    assert_eq!(seq.as_slice()[1].coordinate, c(8.0, 8.0));

    assert!(seq.insert(9, Waypoint::connector("P9".into(), c(0.0, 0.0))).is_err());
}
