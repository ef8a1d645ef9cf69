use super::*;

fn gallery(n: usize) -> Gallery {
    let images = (0..n).map(|i| GalleryImage::new(format!("/img/{i}.jpg"), format!("Image {i}"))).collect();
    Gallery::new(images, 0).expect("non-empty gallery")
}

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_gallery_is_rejected() {
    assert!(Gallery::new(Vec::new(), 0).is_none());
    assert!(Gallery::from_sources(&[], "Slide", 0).is_none());
}

#[test]
fn start_index_is_clamped() {
    let images = vec![GalleryImage::new("a", "A"), GalleryImage::new("b", "B")];
    let g = Gallery::new(images, 9).expect("non-empty gallery");
    assert_eq!(g.index(), 1);
    assert_eq!(g.direction(), Direction::None);
}

#[test]
fn single_matches_one_image_gallery_at_zero() {
    let single = Gallery::single("/a.jpg", "A");
    let built = Gallery::new(vec![GalleryImage::new("/a.jpg", "A")], 0).expect("non-empty gallery");
    assert_eq!(single, built);
}

#[test]
fn from_sources_numbers_alt_text() {
    let g = Gallery::from_sources(&["/s1.png", "/s2.png"], "Slide", 1).expect("non-empty gallery");
    assert_eq!(g.current(), &GalleryImage::new("/s2.png", "Slide 2"));
    assert_eq!(g.images()[0].alt, "Slide 1");
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn next_n_times_returns_to_start() {
    for n in 1..=6 {
        let mut g = gallery(n);
        for _ in 0..n {
            g.next();
        }
        assert_eq!(g.index(), 0, "length {n}");
    }
}

#[test]
fn previous_from_zero_wraps_to_last() {
    let mut g = gallery(5);
    g.previous();
    assert_eq!(g.index(), 4);
    assert_eq!(g.direction(), Direction::Backward);
}

#[test]
fn next_sets_forward_direction() {
    let mut g = gallery(3);
    g.next();
    assert_eq!(g.index(), 1);
    assert_eq!(g.direction(), Direction::Forward);
    assert_eq!(g.direction() as i8, 1);
}

#[test]
fn go_to_sets_direction_from_previous_index() {
    let mut g = gallery(5);
    g.go_to(3);
    assert_eq!((g.index(), g.direction()), (3, Direction::Forward));
    g.go_to(1);
    assert_eq!((g.index(), g.direction()), (1, Direction::Backward));
}

#[test]
fn go_to_out_of_range_is_ignored() {
    let mut g = gallery(3);
    g.next();
    let before = g.clone();
    g.go_to(3);
    g.go_to(usize::MAX);
    assert_eq!(g, before);
}

#[test]
fn rapid_inputs_each_move_exactly_once() {
    let mut g = gallery(4);
    for _ in 0..10 {
        g.next();
    }
    assert_eq!(g.index(), 2);
    for _ in 0..3 {
        g.previous();
    }
    assert_eq!(g.index(), 3);
}

#[test]
fn single_image_never_navigates() {
    let mut g = Gallery::single("/a.jpg", "A");
    assert!(!g.can_navigate());
    g.next();
    g.previous();
    assert_eq!(g.index(), 0);
}

#[test]
fn multi_image_can_navigate() {
    assert!(gallery(2).can_navigate());
}

#[test]
fn position_label_is_one_based() {
    let mut g = gallery(5);
    assert_eq!(g.position_label(), "1 / 5");
    g.previous();
    assert_eq!(g.position_label(), "5 / 5");
}

// =============================================================
// Inputs
// =============================================================

#[test]
fn arrow_keys_map_to_navigation() {
    assert_eq!(GalleryInput::from_key("ArrowRight"), Some(GalleryInput::Next));
    assert_eq!(GalleryInput::from_key("ArrowDown"), Some(GalleryInput::Next));
    assert_eq!(GalleryInput::from_key("ArrowLeft"), Some(GalleryInput::Previous));
    assert_eq!(GalleryInput::from_key("ArrowUp"), Some(GalleryInput::Previous));
    assert_eq!(GalleryInput::from_key("Escape"), Some(GalleryInput::Close));
    assert_eq!(GalleryInput::from_key("Enter"), None);
    assert_eq!(GalleryInput::from_key("arrowright"), None);
}

#[test]
fn apply_close_leaves_gallery_untouched() {
    let mut g = gallery(3);
    let before = g.clone();
    assert!(!g.apply(GalleryInput::Close));
    assert_eq!(g, before);
}

#[test]
fn apply_navigates() {
    let mut g = gallery(3);
    assert!(g.apply(GalleryInput::Previous));
    assert_eq!(g.index(), 2);
    assert!(g.apply(GalleryInput::Next));
    assert_eq!(g.index(), 0);
}

#[test]
fn direction_classes_are_distinct() {
    let classes = [Direction::Backward, Direction::None, Direction::Forward].map(Direction::css_class);
    assert_ne!(classes[0], classes[1]);
    assert_ne!(classes[1], classes[2]);
    assert_ne!(classes[0], classes[2]);
}

#[test]
fn direction_discriminant_is_signed_step() {
    assert_eq!(Direction::Backward as i8, -1);
    assert_eq!(Direction::None as i8, 0);
    assert_eq!(Direction::Forward as i8, 1);
}
