use std::env;
use std::process::ExitCode;

use polybasis::configuration::Configuration;
use polybasis::manager::manager::IManager;
use polybasis::math::curve::curve::{
    Curve,
    CurveIntegration
};
use polybasis::math::polynomial::basis::Basis;

const DEFAULT_CONFIG: &str = "json/config.json";
const TAU: f64 = -0.5;

fn main() -> ExitCode {
    let config_path = env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_owned());
    let config = Configuration::new();
    if let Err(error) = config.from_reader(&config_path) {
        eprintln!("cannot load {}: {}", config_path, error);
        return ExitCode::FAILURE;
    }
    let exp_integration = config.exp_integration();
    let names = config.polynomial_manager().names();
    for name in names {
        let poly = match config.polynomial(&name) {
            Ok(poly) => poly,
            Err(error) => {
                eprintln!("{}", error);
                return ExitCode::FAILURE;
            }
        };
        let domain = poly.domain();
        let mid = 0.5 * (domain.xmin() + domain.xmax());
        println!("{}: {}", name, poly);
        println!("    f({}) = {}, f'({}) = {}", mid, poly.value(mid), mid, poly.derivative(mid));
        println!("    ∫f = {}", poly.integral(domain.xmin(), domain.xmax()));
        println!(
            "    ∫f·exp({}x) = {}",
            TAU,
            exp_integration.integrate_basis(&poly, TAU, domain.xmin(), domain.xmax())
        );
        for basis in Basis::ALL {
            if basis != poly.basis() {
                println!("    as {}", poly.convert(basis));
            }
        }
    }
    ExitCode::SUCCESS
}
