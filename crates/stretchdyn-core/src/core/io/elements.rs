use phf::{Map, phf_map};

/// Standard atomic weights in amu, keyed by element symbol.
///
/// Used to default an atom's mass when a topology file omits it. Values are
/// the IUPAC 2021 conventional weights, truncated to the precision a
/// stretch-dynamics model can actually exploit.
pub static ELEMENT_MASS_AMU: Map<&'static str, f64> = phf_map! {
    "H" => 1.008,
    "He" => 4.0026,
    "Li" => 6.94,
    "Be" => 9.0122,
    "B" => 10.81,
    "C" => 12.011,
    "N" => 14.007,
    "O" => 15.999,
    "F" => 18.998,
    "Ne" => 20.180,
    "Na" => 22.990,
    "Mg" => 24.305,
    "Al" => 26.982,
    "Si" => 28.085,
    "P" => 30.974,
    "S" => 32.06,
    "Cl" => 35.45,
    "Ar" => 39.95,
    "K" => 39.098,
    "Ca" => 40.078,
    "Fe" => 55.845,
    "Zn" => 65.38,
    "Br" => 79.904,
    "I" => 126.90,
};

/// Looks up the standard atomic weight for an element symbol.
pub fn element_mass(symbol: &str) -> Option<f64> {
    ELEMENT_MASS_AMU.get(symbol).copied()
}
