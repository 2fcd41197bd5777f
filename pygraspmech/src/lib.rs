use graspmech_core::io::pattern_file::PatternFileError;
use graspmech_core::mechanism::ConversionOptions;

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

fn to_options(
    promiscuous: bool,
    inhib_list: Option<Vec<String>>,
    activ_list: Option<Vec<String>>,
) -> ConversionOptions {
    ConversionOptions::new(
        promiscuous,
        inhib_list.unwrap_or_default(),
        activ_list.unwrap_or_default(),
    )
}

/// Convert a mechanism written as elementary reactions into a GRASP pattern string
#[pyfunction]
#[pyo3(signature = (er_mech, promiscuous=false, inhib_list=None, activ_list=None))]
fn convert_mechanism(
    er_mech: &str,
    promiscuous: bool,
    inhib_list: Option<Vec<String>>,
    activ_list: Option<Vec<String>>,
) -> PyResult<String> {
    let options = to_options(promiscuous, inhib_list, activ_list);
    graspmech_core::convert_mechanism(er_mech, &options)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Convert a mechanism file into a GRASP pattern file
#[pyfunction]
#[pyo3(signature = (file_in, file_out, promiscuous=false, inhib_list=None, activ_list=None))]
fn convert_er_mech_to_grasp_pattern(
    file_in: &str,
    file_out: &str,
    promiscuous: bool,
    inhib_list: Option<Vec<String>>,
    activ_list: Option<Vec<String>>,
) -> PyResult<()> {
    let options = to_options(promiscuous, inhib_list, activ_list);
    match graspmech_core::convert_er_mech_to_grasp_pattern(file_in, file_out, &options) {
        Ok(_) => Ok(()),
        Err(PatternFileError::Conversion(e)) => Err(PyValueError::new_err(e.to_string())),
        Err(e) => Err(PyIOError::new_err(e.to_string())),
    }
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convert_mechanism, m)?)?;
    m.add_function(wrap_pyfunction!(convert_er_mech_to_grasp_pattern, m)?)?;
    Ok(())
}
