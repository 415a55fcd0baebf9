use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MassClass {
    Asteroidan,
    Mercurian,
    Subterran,
    Terran,
    Superterran,
    Neptunian,
    Jovian,
    Unknown,
}

impl MassClass {
    /// Mass class for a planet mass in Earth masses.
    pub fn from_mass(mass: Option<f64>) -> Self {
        let Some(m) = mass.filter(|m| m.is_finite() && *m > 0.0) else {
            return MassClass::Unknown;
        };
        if m < 0.00001 {
            MassClass::Asteroidan
        } else if m < 0.1 {
            MassClass::Mercurian
        } else if m < 0.5 {
            MassClass::Subterran
        } else if m < 2.0 {
            MassClass::Terran
        } else if m < 10.0 {
            MassClass::Superterran
        } else if m < 50.0 {
            MassClass::Neptunian
        } else if m < 5000.0 {
            MassClass::Jovian
        } else {
            MassClass::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MassClass::Asteroidan => "Asteroidan",
            MassClass::Mercurian => "Mercurian",
            MassClass::Subterran => "Subterran",
            MassClass::Terran => "Terran",
            MassClass::Superterran => "Superterran",
            MassClass::Neptunian => "Neptunian",
            MassClass::Jovian => "Jovian",
            MassClass::Unknown => "Unknown Mass Class",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureClass {
    Hypopsychroplanet,
    Psychroplanet,
    MesoplanetTemperate,
    MesoplanetOptimal,
    Thermoplanet,
    Hyperthermoplanet,
    Unknown,
}

impl TemperatureClass {
    /// Temperature class for an equilibrium temperature in kelvin.
    pub fn from_temperature(temp: Option<f64>) -> Self {
        let Some(t) = temp.filter(|t| t.is_finite() && *t >= 0.0) else {
            return TemperatureClass::Unknown;
        };
        if t < 170.0 {
            TemperatureClass::Hypopsychroplanet
        } else if t < 220.0 {
            TemperatureClass::Psychroplanet
        } else if t < 273.0 {
            TemperatureClass::MesoplanetTemperate
        } else if t < 323.0 {
            TemperatureClass::MesoplanetOptimal
        } else if t < 373.0 {
            TemperatureClass::Thermoplanet
        } else {
            TemperatureClass::Hyperthermoplanet
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemperatureClass::Hypopsychroplanet => "Hypopsychroplanet (Very Cold)",
            TemperatureClass::Psychroplanet => "Psychroplanet (Cold)",
            TemperatureClass::MesoplanetTemperate => "Mesoplanet (Temperate 1)",
            TemperatureClass::MesoplanetOptimal => {
                "Mesoplanet (Temperate 2 - Optimal for Earth Life)"
            }
            TemperatureClass::Thermoplanet => "Thermoplanet (Warm)",
            TemperatureClass::Hyperthermoplanet => "Hyperthermoplanet (Hot)",
            TemperatureClass::Unknown => "Unknown Temperature Class",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub mass_class: MassClass,
    pub temperature_class: TemperatureClass,
    /// Mass the class was derived from, measured or estimated from radius.
    pub mass_used: Option<f64>,
    pub mass_estimated: bool,
}

impl Classification {
    pub fn label(&self) -> String {
        format!(
            "{} | {}",
            self.mass_class.label(),
            self.temperature_class.label()
        )
    }

    pub fn tags(&self) -> ClassTags {
        ClassTags::from_label(&self.label())
    }
}

impl Serialize for Classification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// Class membership flags read off a classification label.
///
/// Matching is an exact, case-sensitive substring test, so `Superterran`
/// does not set `terran`. Rules that cover both name both flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassTags {
    pub terran: bool,
    pub superterran: bool,
    pub subterran: bool,
    pub mini_terran: bool,
    pub neptunian: bool,
    pub jovian: bool,
}

impl ClassTags {
    pub fn from_label(label: &str) -> Self {
        Self {
            terran: label.contains("Terran"),
            superterran: label.contains("Superterran"),
            subterran: label.contains("Subterran"),
            mini_terran: label.contains("Mini-Terran"),
            neptunian: label.contains("Neptunian"),
            jovian: label.contains("Jovian"),
        }
    }

    pub fn terran_or_superterran(&self) -> bool {
        self.terran || self.superterran
    }

    pub fn small_rocky(&self) -> bool {
        self.mini_terran || self.subterran
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/classification.rs"]
mod tests;
