use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::math::polynomial::polynomialsum::BasisPolynomial;

fn get_polynomial_from_json(json_value: serde_json::Value) -> Result<BasisPolynomial, ManagerError> {
    let polynomial: BasisPolynomial = ManagerError::from_json_or_json_parse_error(json_value)?;
    log::debug!("loaded {} of degree {}", polynomial.basis().name(), polynomial.degree());
    Ok(polynomial)
}

pub struct PolynomialManager;

impl PolynomialManager {
    pub fn new() -> Manager<BasisPolynomial> {
        Manager::new(get_polynomial_from_json)
    }
}
