use super::*;

fn ring_points() -> Vec<Point> {
    // Outer square with an inner square hole.
    vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 0.0),
        Point::new(3.0, 3.0),
        Point::new(0.0, 3.0),
        Point::new(1.0, 1.0),
        Point::new(2.0, 1.0),
        Point::new(2.0, 2.0),
        Point::new(1.0, 2.0),
    ]
}

fn ring_connectivity() -> ConnectivityTable {
    ConnectivityTable {
        triangles: vec![
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ],
    }
}

#[test]
fn explicit_connectivity_is_used_verbatim() {
    let conn = ring_connectivity();
    let mesh = Mesh::build(ring_points(), Some(&conn)).unwrap();
    assert_eq!(mesh.kind(), Triangulation::Explicit);
    assert_eq!(mesh.triangle_count(), conn.len());
    assert_eq!(mesh.triangles(), conn.triangles.as_slice());
}

#[test]
fn implicit_triangulation_fills_the_hole() {
    let mesh = Mesh::build(ring_points(), None).unwrap();
    assert_eq!(mesh.kind(), Triangulation::Delaunay);
    // 8 points, 4 on the hull: 2n - 2 - h = 10 triangles, two of them inside the hole.
    assert_eq!(mesh.triangle_count(), 10);
}

#[test]
fn out_of_range_connectivity_is_rejected() {
    let conn = ConnectivityTable {
        triangles: vec![[0, 1, 2], [2, 3, 8]],
    };
    let err = Mesh::explicit(ring_points(), &conn).unwrap_err();
    assert!(matches!(err, FieldError::DataFormat(_)));
    assert!(err.to_string().contains("row 2"), "{err}");
}

#[test]
fn bounds_and_value_checks() {
    let mesh = Mesh::build(ring_points(), Some(&ring_connectivity())).unwrap();
    assert_eq!(mesh.bounds(), Rect::new(0.0, 0.0, 3.0, 3.0));
    assert!(mesh.check_values(&[0.0; 8]).is_ok());
    assert!(matches!(
        mesh.check_values(&[0.0; 7]),
        Err(FieldError::DataFormat(_))
    ));
}
