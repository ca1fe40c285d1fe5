/*
Run one mood simulation and print the outcome as JSON.

With no arguments this simulates the default persona under the default
configuration. Pass a path to a JSON simulator config to select variants,
e.g. {"horizon": 50, "volatility": {"mode": "stochastic"}, "seed": {"fixed": 42}}.
An optional second argument names a journal file; its latest entry supplies
the model coefficients and the starting mood.
*/
use moodrift::{
    Journal, PersonaInputs, RiskVerdict, SimulationParameters, SimulatorConfig,
    TrajectorySimulator, DEFAULT_INITIAL_MOOD,
};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let raw = std::fs::read_to_string(&path).expect("read config file");
            let value = serde_json::from_str(&raw).expect("config file is not valid JSON");
            SimulatorConfig::from_json(&value)
        }
        None => SimulatorConfig::default(),
    };

    let (params, initial_mood) = match args.next() {
        Some(path) => {
            let latest = Journal::open(path)
                .last()
                .expect("read journal")
                .expect("journal has no entries");
            let mood = latest.initial_mood();
            (SimulationParameters::from_journal_entry(&latest), mood)
        }
        None => (
            PersonaInputs::default().to_parameters(),
            DEFAULT_INITIAL_MOOD,
        ),
    };

    let threshold = config.collapse_threshold;
    let simulator = TrajectorySimulator::new(params, config).expect("valid configuration");
    let outcome = simulator.run(initial_mood).expect("simulation run");

    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).expect("serialize outcome")
    );
    match RiskVerdict::for_trajectory(&outcome.trajectory, threshold) {
        RiskVerdict::Stable => eprintln!("trajectory stable above {threshold}"),
        RiskVerdict::AtRisk => eprintln!("trajectory crosses the collapse threshold {threshold}"),
    }
}
