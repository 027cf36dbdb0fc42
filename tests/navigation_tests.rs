use freezetable::state::workouts::{self, find_workout};
use freezetable::ui::app::Screen;

#[test]
fn test_open_workout_carries_slug() {
    assert_eq!(
        Screen::open_workout("core-strength"),
        Screen::WorkoutDetail {
            slug: "core-strength".to_string()
        }
    );
}

#[test]
fn test_every_listed_workout_opens_its_detail() {
    let seed = workouts::seed_workouts().unwrap();
    for workout in &seed {
        let Screen::WorkoutDetail { slug } = Screen::open_workout(&workout.slug) else {
            panic!("expected a detail screen for {}", workout.slug);
        };
        assert_eq!(find_workout(&seed, &slug), Some(workout));
    }
}

#[test]
fn test_unknown_slug_finds_nothing() {
    let seed = workouts::seed_workouts().unwrap();
    let Screen::WorkoutDetail { slug } = Screen::open_workout("no-such-workout") else {
        panic!("expected a detail screen");
    };
    assert!(find_workout(&seed, &slug).is_none());
}
