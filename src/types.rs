use serde::Deserialize;

/// Formats a JSON number the way the backend sent it: integral values
/// without a trailing `.0`, everything else as-is (120 → "120", 1.2 → "1.2").
pub fn fmt_num(value: f64) -> String {
    if value.is_finite() && value == value.trunc() && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Axis labels arrive as strings from some backend versions ("10s") and as
/// bare numbers from others. Accept both.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisLabel {
    Text(String),
    Number(f64),
}

impl Default for AxisLabel {
    fn default() -> Self {
        AxisLabel::Text(String::new())
    }
}

impl AxisLabel {
    pub fn display(&self) -> String {
        match self {
            AxisLabel::Text(text) => text.clone(),
            AxisLabel::Number(value) => fmt_num(*value),
        }
    }
}

// ── Content analysis ─────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentReport {
    pub stats: ContentStats,
    pub errors: Vec<SpellingError>,
    pub original_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContentStats {
    pub word_count: u32,
    pub error_count: u32,
    pub avg_errors: f64,
}

impl ContentStats {
    pub fn avg_label(&self) -> String {
        format!("{} /문장", fmt_num(self.avg_errors))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpellingError {
    pub original: String,
    pub suggestion: String,
    #[serde(rename = "type")]
    pub kind: String,
}

// ── Voice analysis ───────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoiceReport {
    pub stats: VoiceStats,
    pub speed_data: Vec<SpeedPoint>,
    pub pitch_and_volume_data: Vec<PitchVolumePoint>,
    pub filler_data: Vec<FillerPoint>,
    pub pause_data: Vec<PausePoint>,
    pub tips: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VoiceStats {
    pub speed: f64,
    pub accuracy: f64,
    pub filler_count: u32,
    pub pause_avg: f64,
}

impl VoiceStats {
    pub fn speed_label(&self) -> String {
        format!("{} wpm", fmt_num(self.speed))
    }

    pub fn accuracy_label(&self) -> String {
        format!("{}%", fmt_num(self.accuracy))
    }

    pub fn filler_label(&self) -> String {
        format!("{}회", self.filler_count)
    }

    pub fn pause_label(&self) -> String {
        format!("{}s", fmt_num(self.pause_avg))
    }
}

/// The script-comparison backend labels the value `wpm` where the plain
/// audio backend says `speed`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpeedPoint {
    pub time: AxisLabel,
    #[serde(alias = "wpm")]
    pub speed: f64,
}

/// Intonation/volume samples. Backend versions disagree on the fields here
/// (`pitch`/`volume` vs `pitchStd`/`mfccMean`/`mfccStd`), so every field
/// defaults to zero/empty rather than failing the whole response.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PitchVolumePoint {
    pub x: f64,
    pub pitch: f64,
    pub volume: f64,
    pub pitch_std: f64,
    pub mfcc_mean: Vec<f64>,
    pub mfcc_std: Vec<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FillerPoint {
    pub word: String,
    pub count: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PausePoint {
    pub length: AxisLabel,
    pub freq: f64,
}

// ── Video analysis ───────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoReport {
    pub head_pose_ratios: HeadPoseRatios,
    pub pitch_by_frame: Vec<PitchSample>,
    pub blink_timeline: Vec<BlinkSample>,
    pub blink_summary: Option<BlinkSummary>,
    pub tips: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeadPoseRatios {
    pub looking_up: f64,
    pub looking_front: f64,
    pub looking_down: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PitchSample {
    pub time_sec: f64,
    pub pitch_deg: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlinkSample {
    pub frame: u32,
    pub blink: u8,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlinkSummary {
    pub duration: String,
    pub blink_count: u32,
    pub blinks_per_min: f64,
    pub grade: String,
    pub interpretation: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_drops_integral_fraction() {
        assert_eq!(fmt_num(120.0), "120");
        assert_eq!(fmt_num(92.0), "92");
        assert_eq!(fmt_num(1.2), "1.2");
        assert_eq!(fmt_num(0.0), "0");
        assert_eq!(fmt_num(-6.2), "-6.2");
    }

    #[test]
    fn voice_stats_labels_match_summary_cards() {
        let report: VoiceReport = serde_json::from_str(
            r#"{
                "stats": {"speed": 120, "accuracy": 92, "fillerCount": 5, "pauseAvg": 1.2},
                "speedData": [
                    {"time": "0s", "speed": 110},
                    {"time": "10s", "speed": 125}
                ],
                "pitchAndVolumeData": [{"x": 0, "pitch": 200, "volume": 0.8}],
                "fillerData": [{"word": "음", "count": 3}],
                "pauseData": [{"length": 0.5, "freq": 4}],
                "tips": ["tip"]
            }"#,
        )
        .unwrap();

        assert_eq!(report.stats.speed_label(), "120 wpm");
        assert_eq!(report.stats.accuracy_label(), "92%");
        assert_eq!(report.stats.filler_label(), "5회");
        assert_eq!(report.stats.pause_label(), "1.2s");
        assert_eq!(report.speed_data[1].time.display(), "10s");
        assert_eq!(report.pause_data[0].length.display(), "0.5");
    }

    #[test]
    fn speech_variant_fields_default_when_absent() {
        // The script-comparison backend: `wpm` for speed, numeric times, and
        // pitchStd/mfccMean/mfccStd rows with no volume at all.
        let report: VoiceReport = serde_json::from_str(
            r#"{
                "stats": {"speed": 132.5, "accuracy": 88.1, "fillerCount": 2, "pauseAvg": 0.4},
                "speedData": [{"time": 0, "wpm": 131.0}, {"time": 10, "wpm": 134.2}],
                "pitchAndVolumeData": [
                    {"pitch": 180.2, "pitchStd": 12.5},
                    {"mfccMean": [1.0, 2.0], "mfccStd": [0.1, 0.2]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(report.speed_data[0].speed, 131.0);
        assert_eq!(report.speed_data[1].time.display(), "10");
        assert_eq!(report.pitch_and_volume_data[0].pitch_std, 12.5);
        assert_eq!(report.pitch_and_volume_data[0].volume, 0.0);
        assert_eq!(report.pitch_and_volume_data[1].mfcc_mean, vec![1.0, 2.0]);
        assert!(report.filler_data.is_empty());
        assert!(report.pause_data.is_empty());
        assert!(report.tips.is_empty());
    }

    #[test]
    fn video_report_tolerates_null_blink_summary() {
        let report: VideoReport = serde_json::from_str(
            r#"{
                "head_pose_ratios": {"looking_up": 0.1, "looking_front": 0.6, "looking_down": 0.3},
                "pitch_by_frame": [{"time_sec": 0, "pitch_deg": 2.1}],
                "blink_timeline": [{"frame": 1, "blink": 0}, {"frame": 2, "blink": 1}],
                "blink_summary": null,
                "tips": []
            }"#,
        )
        .unwrap();

        assert!(report.blink_summary.is_none());
        assert_eq!(report.head_pose_ratios.looking_front, 0.6);
        assert_eq!(report.blink_timeline[1].blink, 1);
    }

    #[test]
    fn video_report_defaults_missing_series_to_empty() {
        let report: VideoReport = serde_json::from_str("{}").unwrap();
        assert!(report.pitch_by_frame.is_empty());
        assert!(report.blink_timeline.is_empty());
        assert!(report.blink_summary.is_none());
        assert_eq!(report.head_pose_ratios.looking_up, 0.0);
    }

    #[test]
    fn content_report_maps_wire_fields() {
        let report: ContentReport = serde_json::from_str(
            r#"{
                "stats": {"wordCount": 250, "errorCount": 4, "avgErrors": 0.8},
                "errors": [{"original": "됬다", "suggestion": "됐다", "type": "맞춤법"}],
                "originalText": "발표가 잘 됬다"
            }"#,
        )
        .unwrap();

        assert_eq!(report.stats.word_count, 250);
        assert_eq!(report.stats.avg_label(), "0.8 /문장");
        assert_eq!(report.errors[0].kind, "맞춤법");
        assert_eq!(report.original_text, "발표가 잘 됬다");
    }
}
