use super::*;

#[test]
fn starts_idle() {
    let pointer = Pointer::default();
    assert_eq!(pointer, Pointer::Idle);
    assert_eq!(pointer.position(), None);
}

#[test]
fn move_activates() {
    let mut pointer = Pointer::Idle;
    pointer.move_to(12.0, 30.0);
    assert_eq!(pointer, Pointer::Active { x: 12.0, y: 30.0 });
    assert_eq!(pointer.position(), Some(Point::new(12.0, 30.0)));
}

#[test]
fn move_while_active_tracks_latest_position() {
    let mut pointer = Pointer::Idle;
    pointer.move_to(1.0, 1.0);
    pointer.move_to(2.0, 3.0);
    assert_eq!(pointer.position(), Some(Point::new(2.0, 3.0)));
}

#[test]
fn leave_returns_to_idle() {
    let mut pointer = Pointer::Active { x: 5.0, y: 5.0 };
    pointer.leave();
    assert_eq!(pointer, Pointer::Idle);
    pointer.leave();
    assert_eq!(pointer, Pointer::Idle);
}
