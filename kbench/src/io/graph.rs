use std::path::Path;

use itertools::Itertools;
use knapsack_rs::bench::DatasetStats;
use knapsack_rs::solvers::Method;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Line, Path as SvgPath, Rectangle, Text};

use crate::config::GraphOptions;

const X_LABEL: &str = "dataset";
const Y_LABEL: &str = "y";

/// One statistic plotted over all datasets, with a series per solving method
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    /// Name of the statistic, e.g. `avg_price`
    pub title: &'static str,
    /// Dataset IDs, in dataset order
    pub x: Vec<u64>,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub method: Method,
    /// One value per dataset, aligned with [`Graph::x`]
    pub y: Vec<f64>,
}

impl Graph {
    /// One graph per statistic of the first dataset's first method
    pub fn from_stats(stats: &[DatasetStats]) -> Vec<Graph> {
        let Some(first) = stats.first().and_then(|ds| ds.methods.first()) else {
            return vec![];
        };
        let methods = stats[0].methods.iter().map(|ms| ms.method).collect_vec();
        let x = stats.iter().map(|ds| ds.dataset_id).collect_vec();

        first
            .stats
            .fields()
            .into_iter()
            .map(|(title, _)| Graph {
                title,
                x: x.clone(),
                series: methods
                    .iter()
                    .map(|&method| Series {
                        method,
                        y: stats
                            .iter()
                            .map(|ds| field_value(ds, method, title))
                            .collect(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Gnuplot script which renders the graph into `<out_dir>/<title>.png`
    pub fn to_gnuplot(&self, out_dir: &Path) -> String {
        let png = out_dir.join(format!("{}.png", self.title));
        let mut script = format!(
            "set term png\n\
             set output '{}'\n\
             set title '{}'\n\
             set ylabel '{}'\n\
             set xlabel '{}'\n\
             set key outside\n",
            png.display(),
            escape_gnuplot(self.title),
            escape_gnuplot(Y_LABEL),
            escape_gnuplot(X_LABEL)
        );

        let plots = self
            .series
            .iter()
            .map(|s| format!("'-' title '{}' with linespoints", escape_gnuplot(s.method.name())))
            .join(", ");
        script.push_str(&format!("plot {plots}\n"));

        //inline data, one block per series
        for s in &self.series {
            for (x, y) in self.x.iter().zip(&s.y) {
                script.push_str(&format!("{x} {y:?}\n"));
            }
            script.push_str("e\n");
        }
        script
    }

    pub fn to_svg(&self, options: &GraphOptions) -> Document {
        let theme = &options.theme;
        let (width, height) = (options.width, options.height);
        let font_size = f32::min(width, height) * 0.03;

        //plot area, with room for the axis labels on the left and bottom and the key on the right
        let (left, right) = (0.12 * width, 0.72 * width);
        let (top, bottom) = (0.1 * height, 0.85 * height);

        let (x_min, x_max) = match self.x.iter().minmax().into_option() {
            Some((&min, &max)) => (min as f32, max as f32),
            None => (0.0, 1.0),
        };
        let y_max = self
            .series
            .iter()
            .flat_map(|s| s.y.iter().copied())
            .fold(0.0_f64, f64::max) as f32;

        let to_x = |x: u64| match x_max > x_min {
            true => left + (x as f32 - x_min) / (x_max - x_min) * (right - left),
            false => 0.5 * (left + right),
        };
        let to_y = |y: f64| match y_max > 0.0 {
            true => bottom - (y as f32 / y_max) * (bottom - top),
            false => bottom,
        };

        let axis_style = |line: Line| {
            line.set("stroke", theme.axis.to_string())
                .set("stroke-width", 0.5 * theme.stroke_width)
        };
        let text = |content: String, x: f32, y: f32, anchor: &str| {
            Text::new(content)
                .set("x", x)
                .set("y", y)
                .set("font-size", font_size)
                .set("font-family", "monospace")
                .set("text-anchor", anchor.to_owned())
                .set("fill", theme.axis.to_string())
        };

        let axes = {
            let mut group = Group::new()
                .set("id", "axes")
                .add(axis_style(
                    Line::new().set("x1", left).set("y1", bottom).set("x2", right).set("y2", bottom),
                ))
                .add(axis_style(
                    Line::new().set("x1", left).set("y1", bottom).set("x2", left).set("y2", top),
                ))
                .add(text(self.title.to_owned(), 0.5 * (left + right), 0.5 * top, "middle"))
                .add(text(X_LABEL.to_owned(), 0.5 * (left + right), height - font_size, "middle"))
                .add(text(Y_LABEL.to_owned(), 0.5 * left, 0.5 * (top + bottom), "middle"))
                .add(text(format!("{y_max}"), left - 0.5 * font_size, top, "end"))
                .add(text("0".to_owned(), left - 0.5 * font_size, bottom, "end"));
            for &x in self.x.iter().unique() {
                group = group.add(text(x.to_string(), to_x(x), bottom + 1.5 * font_size, "middle"));
            }
            group
        };

        let mut series_group = Group::new().set("id", "series");
        let mut key_group = Group::new().set("id", "key");
        for (i, s) in self.series.iter().enumerate() {
            let color = theme.series[i % theme.series.len()].to_string();
            let points = self.x.iter().zip(&s.y).map(|(&x, &y)| (to_x(x), to_y(y))).collect_vec();

            if let Some((&first, rest)) = points.split_first() {
                let data = rest.iter().fold(Data::new().move_to(first), |d, &p| d.line_to(p));
                series_group = series_group.add(
                    SvgPath::new()
                        .set("fill", "none")
                        .set("stroke", color.clone())
                        .set("stroke-width", theme.stroke_width)
                        .set("d", data),
                );
            }
            for (x, y) in points {
                series_group = series_group.add(
                    Circle::new()
                        .set("cx", x)
                        .set("cy", y)
                        .set("r", 1.5 * theme.stroke_width)
                        .set("fill", color.clone()),
                );
            }

            let key_y = top + (i as f32 + 0.5) * 1.5 * font_size;
            key_group = key_group
                .add(
                    Line::new()
                        .set("x1", right + 0.03 * width)
                        .set("y1", key_y)
                        .set("x2", right + 0.08 * width)
                        .set("y2", key_y)
                        .set("stroke", color)
                        .set("stroke-width", theme.stroke_width),
                )
                .add(text(
                    s.method.name().to_owned(),
                    right + 0.1 * width,
                    key_y + 0.35 * font_size,
                    "start",
                ));
        }

        Document::new()
            .set("viewBox", (0.0, 0.0, width, height))
            .set("width", width)
            .set("height", height)
            .add(
                Rectangle::new()
                    .set("width", width)
                    .set("height", height)
                    .set("fill", theme.background.to_string()),
            )
            .add(axes)
            .add(series_group)
            .add(key_group)
    }
}

fn field_value(ds: &DatasetStats, method: Method, field: &str) -> f64 {
    ds.method(method)
        .and_then(|ms| ms.stats.fields().into_iter().find(|(k, _)| *k == field))
        .map_or(f64::NAN, |(_, v)| v)
}

/// Underscores denote subscripts in gnuplot
pub fn escape_gnuplot(s: &str) -> String {
    s.replace('_', "\\_")
}
