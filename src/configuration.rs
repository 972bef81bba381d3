use std::cell::{
    Ref,
    RefCell,
    RefMut
};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager,
    Manager
};
use crate::math::polynomial::exponential::ExpIntegration;
use crate::math::polynomial::polynomialmanager::PolynomialManager;
use crate::math::polynomial::polynomialsum::BasisPolynomial;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    exp_integration: ExpIntegration,
    #[serde(default)]
    polynomial: Vec<serde_json::Value>
}

pub struct Configuration {
    exp_integration_cell: RefCell<ExpIntegration>,
    polynomial_manager_cell: RefCell<Manager<BasisPolynomial>>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            exp_integration_cell: RefCell::new(ExpIntegration::default()),
            polynomial_manager_cell: RefCell::new(PolynomialManager::new())
        }
    }

    pub fn exp_integration(&self) -> ExpIntegration {
        *self.exp_integration_cell.borrow()
    }

    pub fn polynomial_manager(&self) -> RefMut<'_, Manager<BasisPolynomial>> {
        self.polynomial_manager_cell.borrow_mut()
    }

    pub fn polynomial(&self, name: &str) -> Result<BasisPolynomial, ManagerError> {
        let manager: Ref<'_, Manager<BasisPolynomial>> = self.polynomial_manager_cell.borrow();
        manager.get(name)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        *self.exp_integration_cell.borrow_mut() = json_prop.exp_integration;
        let polynomial_manager = self.polynomial_manager_cell.borrow();
        polynomial_manager.insert_obj_from_json_vec(&json_prop.polynomial)?;
        log::info!("configuration loaded: {} polynomial(s)", polynomial_manager.names().len());
        Ok(())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}
