pub mod config;
pub mod error;
pub mod random;
pub mod scenarios;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use dc_core::{decide_dc, Verdict};

fn main() {
    let config = config::load_config().expect("Failed to load config");

    println!("Running built-in scenarios...");
    for scenario in scenarios::builtin_scenarios() {
        run_scenario(scenario.name, &scenario.network, config.scenario.print_edges);
    }

    if config.random.enabled {
        println!("Running a random scenario...");
        let mut rng = SmallRng::from_os_rng();
        match random::random_network(
            config.random.num_nodes,
            config.random.num_controllable,
            config.random.num_contingent,
            &mut rng,
        ) {
            Ok(network) => run_scenario("random", &network, config.scenario.print_edges),
            Err(e) => eprintln!("Failed to build random network: {}", e),
        }
    }
}

fn run_scenario(name: &str, network: &dc_core::Network, print_edges: bool) {
    if print_edges {
        let (n_prime, edges) = dc_core::graph::generate(network);
        println!("  [{}] generated graph has {} nodes:", name, n_prime);
        for edge in &edges {
            println!("    {}", edge);
        }
    }

    match decide_dc(network) {
        Verdict::Dc => println!("  [{}] DC", name),
        Verdict::NotDc => println!("  [{}] NOT DC", name),
    }
}
