use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Configuration of a benchmark run, read from the `--config-file`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of threads solving instances in parallel. If undefined, rayon decides
    #[serde(default)]
    pub n_threads: Option<usize>,
    /// Appearance of the SVG graphs
    #[serde(default)]
    pub graph: GraphOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphOptions {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub theme: GraphTheme,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            theme: GraphTheme::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphTheme {
    pub background: Color,
    pub axis: Color,
    /// Colors of the series, one per solving method
    pub series: [Color; 4],
    pub stroke_width: f32,
}

impl Default for GraphTheme {
    fn default() -> Self {
        GraphTheme::BRIGHT
    }
}

impl GraphTheme {
    pub const BRIGHT: GraphTheme = GraphTheme {
        background: Color(0xFF, 0xFF, 0xFF),
        axis: Color(0x00, 0x00, 0x00),
        series: [
            Color(0x94, 0x00, 0xD3), // PURPLE
            Color(0x00, 0x9E, 0x73), // GREEN
            Color(0x56, 0xB4, 0xE9), // BLUE
            Color(0xE6, 0x9F, 0x00), // ORANGE
        ],
        stroke_width: 2.0,
    };
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl TryFrom<&str> for Color {
    type Error = anyhow::Error;

    fn try_from(s: &str) -> anyhow::Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        anyhow::ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s}, expected #RRGGBB"
        );
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::try_from(s.as_str()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex() {
        assert_eq!(Color(0x94, 0x00, 0xD3).to_string(), "#9400D3");
        assert_eq!(Color::try_from("#9400d3").unwrap(), Color(0x94, 0x00, 0xD3));
        assert_eq!(Color::try_from("0A0B0C").unwrap(), Color(10, 11, 12));
        assert!(Color::try_from("#12345").is_err());
        assert!(Color::try_from("#GG0000").is_err());
    }

    #[test]
    fn partial_config_file() {
        let config: BenchConfig = serde_json::from_str(r#"{"n_threads": 2}"#).unwrap();
        assert_eq!(config.n_threads, Some(2));
        assert_eq!(config.graph, GraphOptions::default());

        let config: BenchConfig = serde_json::from_str(
            r##"{"graph": {"width": 300, "height": 200, "theme": {"background": "#000000", "axis": "#FFFFFF", "series": ["#FF0000", "#00FF00", "#0000FF", "#FFFF00"], "stroke_width": 1.0}}}"##,
        )
        .unwrap();
        assert_eq!(config.n_threads, None);
        assert_eq!(config.graph.width, 300.0);
        assert_eq!(config.graph.theme.series[2], Color(0, 0, 0xFF));
    }
}
