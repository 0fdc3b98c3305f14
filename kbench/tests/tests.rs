#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use float_cmp::approx_eq;
    use kbench::config::GraphOptions;
    use kbench::io;
    use kbench::io::graph::Graph;
    use kbench::io::output::OutputPrinter;
    use knapsack_rs::bench;
    use knapsack_rs::bench::MethodSelection;
    use knapsack_rs::solvers::Method;
    use log::LevelFilter;
    use test_case::test_case;

    const EPSILON: f64 = 0.5;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn all_methods() -> MethodSelection {
        MethodSelection {
            branch_and_bound: true,
            dynamic_programming: true,
            heuristic: true,
            fptas: Some(EPSILON),
        }
    }

    /// Fresh, empty directory for the files written by a single test
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("kbench_{}_{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test_case("../assets/size_4.dataset", 4, 237.0; "size_4")]
    #[test_case("../assets/size_10.dataset", 10, 558.5; "size_10")]
    fn test_dataset(path: &str, expected_id: u64, expected_avg_optimum: f64) {
        init_logger();
        let dataset = io::read_dataset(Path::new(path)).unwrap();
        assert_eq!(dataset.id, expected_id);
        assert_eq!(dataset.n_instances(), 10);

        let results = bench::run(&all_methods(), std::slice::from_ref(&dataset));
        let dr = &results[0];
        let bb = &dr.method(Method::BranchAndBound).unwrap().results;
        let dp = &dr.method(Method::DynamicProgramming).unwrap().results;
        let heuristic = &dr.method(Method::Heuristic).unwrap().results;
        let fptas = &dr.method(Method::Fptas).unwrap().results;

        for (i, instance) in dataset.instances.iter().enumerate() {
            let optimum = bb[i].solution.price;
            assert_eq!(dp[i].solution.price, optimum);
            assert!(heuristic[i].solution.price <= optimum);
            assert!(fptas[i].solution.price as f64 >= (1.0 - EPSILON) * optimum as f64);
            for r in [&bb[i], &dp[i], &heuristic[i], &fptas[i]] {
                assert!(r.solution.is_feasible(instance));
                assert!(r.cpu_time > 0.0 && r.wall_clock_time > 0.0);
            }
        }

        let stats = bench::stats(&results);
        let bb_stats = stats[0].method(Method::BranchAndBound).unwrap().stats;
        assert!(approx_eq!(f64, bb_stats.avg_price, expected_avg_optimum, ulps = 2));
        assert_eq!(bb_stats.avg_relative_error, Some(0.0));
        let heuristic_stats = stats[0].method(Method::Heuristic).unwrap().stats;
        assert!(heuristic_stats.avg_relative_error.unwrap() >= 0.0);
    }

    #[test_case("../assets/invalid/invalid_1.dataset", "dataset: missing ID")]
    #[test_case("../assets/invalid/invalid_2.dataset", "dataset: first line does not contain ID")]
    #[test_case("../assets/invalid/invalid_3.dataset", "dataset: ID is negative")]
    #[test_case("../assets/invalid/invalid_4.dataset", "dataset: ID is not an integer")]
    #[test_case("../assets/invalid/invalid_5.dataset", "dataset: missing knapsack capacity")]
    #[test_case("../assets/invalid/invalid_6.dataset", "dataset: missing pairs (price, weight)")]
    #[test_case("../assets/invalid/invalid_7.dataset", "dataset: instance desctiption contains negative number")]
    #[test_case("../assets/invalid/invalid_8.dataset", "dataset: instance desctiption does not contain only integers")]
    fn test_invalid_dataset(path: &str, message: &str) {
        let err = io::read_dataset(Path::new(path)).unwrap_err();
        assert_eq!(err.root_cause().to_string(), message);
    }

    #[test]
    fn test_output_files() {
        init_logger();
        let dir = scratch_dir("output");
        let files = [
            PathBuf::from("../assets/size_4.dataset"),
            PathBuf::from("../assets/size_10.dataset"),
        ];
        let datasets = files
            .iter()
            .map(|f| io::read_dataset(f).unwrap())
            .collect::<Vec<_>>();
        let selection = MethodSelection {
            branch_and_bound: true,
            heuristic: true,
            ..Default::default()
        };
        let results = bench::run(&selection, &datasets);
        let stats = bench::stats(&results);

        let printer = OutputPrinter::new(&files, Some(dir.as_path()));
        printer.print_results(&results).unwrap();
        printer.print_stats(&stats).unwrap();

        for basename in ["size_4", "size_10"] {
            for method in ["branch_and_bound", "heuristic"] {
                let results_file = dir.join(format!("{basename}_{method}.results"));
                let content = fs::read_to_string(&results_file).unwrap();
                let lines = content.lines().collect::<Vec<_>>();
                assert_eq!(lines[0], format!("# {}", results_file.display()));
                assert_eq!(
                    lines[1],
                    "# price    config    cpu_time    wall_clock_time    relative_error"
                );
                assert_eq!(lines.len(), 2 + 10);
                assert!(lines[2..].iter().all(|l| l.split_whitespace().next().is_some()));

                let stats_file = dir.join(format!("{basename}_{method}.stats"));
                let content = fs::read_to_string(&stats_file).unwrap();
                let lines = content.lines().collect::<Vec<_>>();
                assert_eq!(
                    lines[1],
                    "# avg_price    avg_cpu_time    avg_wall_clock_time    avg_relative_error"
                );
                assert_eq!(lines.len(), 3);
            }
        }
        let size_4_bb = fs::read_to_string(dir.join("size_4_branch_and_bound.stats")).unwrap();
        assert!(size_4_bb.lines().nth(2).unwrap().starts_with("237.0 "));
        assert!(size_4_bb.lines().nth(2).unwrap().ends_with(" 0.0"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_graph_files() {
        init_logger();
        let dir = scratch_dir("graphs");
        let dataset = io::read_dataset(Path::new("../assets/size_4.dataset")).unwrap();
        let results = bench::run(&all_methods(), &[dataset]);
        let stats = bench::stats(&results);

        let graphs = Graph::from_stats(&stats);
        assert_eq!(graphs.len(), 4);
        for graph in graphs {
            let svg_path = dir.join(format!("{}.svg", graph.title));
            let gnuplot_path = dir.join(format!("{}.gnuplot", graph.title));
            io::write_svg(&graph.to_svg(&GraphOptions::default()), &svg_path).unwrap();
            io::write_text(&graph.to_gnuplot(&dir), &gnuplot_path).unwrap();
            assert!(svg_path.is_file());
            let script = fs::read_to_string(&gnuplot_path).unwrap();
            assert!(script.contains("set key outside"));
            assert_eq!(script.matches("\ne\n").count(), 4);
        }

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_json_report_file() {
        let dir = scratch_dir("json");
        let dataset = io::read_dataset(Path::new("../assets/size_4.dataset")).unwrap();
        let results = bench::run(&all_methods(), &[dataset]);
        let report = kbench::io::json_report::JsonReport {
            dataset_files: vec![PathBuf::from("../assets/size_4.dataset")],
            selection: all_methods(),
            config: Default::default(),
            stats: bench::stats(&results),
            results,
        };
        let path = dir.join("report.json");
        io::write_json(&report, &path).unwrap();

        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["results"][0]["methods"].as_array().unwrap().len(), 4);
        assert_eq!(json["stats"][0]["methods"][0]["avg_price"], 237.0);

        let _ = fs::remove_dir_all(&dir);
    }
}
