//! End-to-end checks of the bundled sample packages.
//!
//! Each package goes through the factory and the report writer exactly as the
//! `training` binary runs them.

use training::{
    InfoMessage, SensorPackage, Training, TrainingError, Workout, WorkoutType, process_packages,
    read_package, sample_packages,
};

fn report_for(code: &str, data: &[f64]) -> InfoMessage {
    read_package(code, data)
        .and_then(|workout| workout.as_training().show_training_info())
        .expect("sample package should produce a report")
}

#[test]
fn test_sample_batch_output() {
    let mut out = Vec::new();
    let processed = process_packages(&sample_packages(), &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(processed, 3);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; \
             Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn test_swimming_sample_figures() {
    let info = report_for("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]);

    assert_eq!(info.training_type, "Swimming");
    assert!((info.distance - 0.9936).abs() < 1e-9);
    assert!((info.speed - 1.0).abs() < 1e-9);
    assert!((info.calories - 336.0).abs() < 1e-6);
}

#[test]
fn test_walking_sample_drops_speed_term() {
    // 5.85^2 / 180 = 0.19, which floors to zero.
    let info = report_for("WLK", &[9000.0, 1.0, 75.0, 180.0]);

    assert!((info.speed - 5.85).abs() < 1e-9);
    assert!((info.calories - 0.035 * 75.0 * 60.0).abs() < 1e-6);
}

#[test]
fn test_swimming_speed_formula_over_durations() {
    for (pool_length, count, hours) in [(25.0, 40.0, 1.0), (50.0, 30.0, 0.5), (33.0, 7.0, 2.5)] {
        let workout = read_package("SWM", &[1234.0, hours, 70.0, pool_length, count]).unwrap();
        let expected = pool_length * count / 1000.0 / hours;

        assert!((workout.as_training().get_mean_speed() - expected).abs() < 1e-9);
    }
}

#[test]
fn test_every_code_builds_its_own_variant() {
    let packages = [
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];

    for (code, data) in packages {
        let workout = read_package(code, &data).unwrap();
        assert_eq!(workout.workout_type().code(), code);
        assert_eq!(
            workout.as_training().training_type(),
            workout.workout_type().name()
        );
    }

    assert!(matches!(
        read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap(),
        Workout::Running(_)
    ));
    assert_eq!(
        read_package("WLK", &[9000.0, 1.0, 75.0, 180.0])
            .unwrap()
            .workout_type(),
        WorkoutType::SportsWalking
    );
}

#[test]
fn test_failing_package_leaves_no_partial_line() {
    let packages = vec![SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 0.0])];
    let mut out = Vec::new();

    let err = process_packages(&packages, &mut out).unwrap_err();

    assert!(matches!(
        err,
        TrainingError::InvalidArgumentValue {
            field: "height_cm",
            ..
        }
    ));
    assert!(out.is_empty());
}

#[test]
fn test_report_serializes_to_json() {
    let info = report_for("RUN", &[15000.0, 1.0, 75.0]);
    let value = serde_json::to_value(&info).unwrap();

    assert_eq!(value["training_type"], "Running");
    assert!((value["calories"].as_f64().unwrap() - 699.75).abs() < 1e-6);
}
