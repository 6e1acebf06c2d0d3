//! Synthetic Pose Data
//!
//! Deterministic stand-in for a real pose-estimation pipeline: landmark
//! positions are closed-form functions of playback progress. The same
//! video duration always yields the same frame sequence.

use std::f64::consts::PI;

/// Samples generated per second of video
pub const FRAME_RATE: f64 = 30.0;

/// Landmarks below this visibility are not drawn
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// Named body points tracked by the mock generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landmark {
    Nose,
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
    LeftHip,
    RightHip,
    LeftKnee,
    RightKnee,
    LeftAnkle,
    RightAnkle,
}

impl Landmark {
    pub const ALL: [Landmark; 13] = [
        Landmark::Nose,
        Landmark::LeftShoulder,
        Landmark::RightShoulder,
        Landmark::LeftElbow,
        Landmark::RightElbow,
        Landmark::LeftWrist,
        Landmark::RightWrist,
        Landmark::LeftHip,
        Landmark::RightHip,
        Landmark::LeftKnee,
        Landmark::RightKnee,
        Landmark::LeftAnkle,
        Landmark::RightAnkle,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Landmark::Nose => "Nose",
            Landmark::LeftShoulder => "Left Shoulder",
            Landmark::RightShoulder => "Right Shoulder",
            Landmark::LeftElbow => "Left Elbow",
            Landmark::RightElbow => "Right Elbow",
            Landmark::LeftWrist => "Left Wrist",
            Landmark::RightWrist => "Right Wrist",
            Landmark::LeftHip => "Left Hip",
            Landmark::RightHip => "Right Hip",
            Landmark::LeftKnee => "Left Knee",
            Landmark::RightKnee => "Right Knee",
            Landmark::LeftAnkle => "Left Ankle",
            Landmark::RightAnkle => "Right Ankle",
        }
    }

    /// Shoulders, hips and wrists get the larger marker
    pub fn is_emphasized(self) -> bool {
        matches!(
            self,
            Landmark::LeftShoulder
                | Landmark::RightShoulder
                | Landmark::LeftHip
                | Landmark::RightHip
                | Landmark::LeftWrist
                | Landmark::RightWrist
        )
    }
}

/// Skeleton segments drawn between landmarks
pub const CONNECTIONS: [(Landmark, Landmark); 14] = [
    // Torso
    (Landmark::LeftShoulder, Landmark::RightShoulder),
    (Landmark::LeftShoulder, Landmark::LeftHip),
    (Landmark::RightShoulder, Landmark::RightHip),
    (Landmark::LeftHip, Landmark::RightHip),
    // Arms
    (Landmark::LeftShoulder, Landmark::LeftElbow),
    (Landmark::LeftElbow, Landmark::LeftWrist),
    (Landmark::RightShoulder, Landmark::RightElbow),
    (Landmark::RightElbow, Landmark::RightWrist),
    // Legs
    (Landmark::LeftHip, Landmark::LeftKnee),
    (Landmark::LeftKnee, Landmark::LeftAnkle),
    (Landmark::RightHip, Landmark::RightKnee),
    (Landmark::RightKnee, Landmark::RightAnkle),
    // Head
    (Landmark::Nose, Landmark::LeftShoulder),
    (Landmark::Nose, Landmark::RightShoulder),
];

/// One landmark sample: percentage coordinates plus a confidence score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandmarkPoint {
    /// 0-100, percent of frame width
    pub x: f64,
    /// 0-100, percent of frame height
    pub y: f64,
    /// 0-1 confidence
    pub visibility: f64,
}

/// All landmark positions at one playback timestamp
#[derive(Debug, Clone, PartialEq)]
pub struct PoseFrame {
    /// Seconds from the start of the video
    pub timestamp: f64,
    points: [LandmarkPoint; Landmark::ALL.len()],
}

impl PoseFrame {
    pub fn point(&self, landmark: Landmark) -> LandmarkPoint {
        self.points[landmark as usize]
    }
}

/// Landmark positions for one normalized progress value, ordered as
/// `Landmark::ALL`
fn points_at(progress: f64) -> [LandmarkPoint; Landmark::ALL.len()] {
    let swing = (progress * PI * 2.0).sin();
    let lift = (progress * PI * 2.0).cos();
    let sway = (progress * PI).sin();

    let p = |x: f64, y: f64, visibility: f64| LandmarkPoint { x, y, visibility };

    [
        p(50.0 + sway * 5.0, 15.0, 0.9),                  // nose
        p(40.0 + swing * 15.0, 25.0, 0.95),               // left shoulder
        p(60.0 - swing * 15.0, 25.0, 0.95),               // right shoulder
        p(35.0 + swing * 20.0, 35.0 + lift * 10.0, 0.9),  // left elbow
        p(65.0 - swing * 20.0, 35.0 + lift * 10.0, 0.9),  // right elbow
        p(30.0 + swing * 25.0, 45.0 + lift * 15.0, 0.85), // left wrist
        p(70.0 - swing * 25.0, 45.0 + lift * 15.0, 0.85), // right wrist
        p(45.0 + sway * 8.0, 50.0, 0.9),                  // left hip
        p(55.0 - sway * 8.0, 50.0, 0.9),                  // right hip
        p(42.0 + sway * 5.0, 65.0, 0.85),                 // left knee
        p(58.0 - sway * 5.0, 65.0, 0.85),                 // right knee
        p(40.0, 80.0, 0.8),                               // left ankle
        p(60.0, 80.0, 0.8),                               // right ankle
    ]
}

/// Generate the full frame sequence for a clip: floor(duration * 30)
/// samples of a stylized swing motion
pub fn generate_swing_frames(duration: f64) -> Vec<PoseFrame> {
    let total_frames = (duration * FRAME_RATE).floor() as usize;
    let mut frames = Vec::with_capacity(total_frames);
    for frame in 0..total_frames {
        let timestamp = frame as f64 / FRAME_RATE;
        let progress = frame as f64 / total_frames as f64;
        frames.push(PoseFrame {
            timestamp,
            points: points_at(progress),
        });
    }
    frames
}

/// Frame with the smallest |timestamp - time|; the earlier frame wins
/// ties. Linear scan, acceptable at 30 samples per second of video.
pub fn nearest_frame(frames: &[PoseFrame], time: f64) -> Option<&PoseFrame> {
    frames.iter().reduce(|closest, frame| {
        if (frame.timestamp - time).abs() < (closest.timestamp - time).abs() {
            frame
        } else {
            closest
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_is_deterministic() {
        let a = generate_swing_frames(2.5);
        let b = generate_swing_frames(2.5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_frame_count_and_timestamps() {
        let frames = generate_swing_frames(2.5);
        assert_eq!(frames.len(), 75);
        assert_eq!(frames[0].timestamp, 0.0);
        assert_eq!(frames[30].timestamp, 1.0);
    }

    #[test]
    fn test_zero_or_invalid_duration_yields_no_frames() {
        assert!(generate_swing_frames(0.0).is_empty());
        assert!(generate_swing_frames(-1.0).is_empty());
        assert!(generate_swing_frames(f64::NAN).is_empty());
    }

    #[test]
    fn test_coordinates_stay_in_frame() {
        for frame in generate_swing_frames(4.0) {
            for landmark in Landmark::ALL {
                let point = frame.point(landmark);
                assert!((0.0..=100.0).contains(&point.x), "x out of frame: {}", point.x);
                assert!((0.0..=100.0).contains(&point.y), "y out of frame: {}", point.y);
                assert!((0.0..=1.0).contains(&point.visibility));
            }
        }
    }

    #[test]
    fn test_nearest_frame_picks_minimal_distance() {
        let frames = generate_swing_frames(1.0);
        let frame = nearest_frame(&frames, 0.52).unwrap();
        assert!((frame.timestamp - 0.5333).abs() < 0.02);
    }

    #[test]
    fn test_nearest_frame_prefers_earlier_on_tie() {
        let frames = vec![
            PoseFrame {
                timestamp: 0.0,
                points: points_at(0.0),
            },
            PoseFrame {
                timestamp: 1.0,
                points: points_at(0.5),
            },
        ];
        let frame = nearest_frame(&frames, 0.5).unwrap();
        assert_eq!(frame.timestamp, 0.0);
    }

    #[test]
    fn test_nearest_frame_on_empty_sequence() {
        assert!(nearest_frame(&[], 1.0).is_none());
    }

    #[test]
    fn test_all_landmarks_visible_at_default_threshold() {
        let frames = generate_swing_frames(1.0);
        for landmark in Landmark::ALL {
            assert!(frames[0].point(landmark).visibility >= VISIBILITY_THRESHOLD);
        }
    }
}
