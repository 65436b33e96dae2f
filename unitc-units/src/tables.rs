//! Static seed data - the built-in unit tables
//!
//! Factors are physical constants and must not be "simplified".
//! Registration order matters within a category: a later unit may claim
//! an alias key registered earlier (observable in the data category,
//! where "b" ends up on bit rather than byte).

use std::f64::consts::PI;

use crate::Registry;

/// Build a fully-populated registry. Callers hold the result and treat
/// it as read-only; there is no process-wide singleton.
pub fn default_registry() -> Registry {
    let mut reg = Registry::new();
    register_length(&mut reg);
    register_mass(&mut reg);
    register_time(&mut reg);
    register_speed(&mut reg);
    register_pressure(&mut reg);
    register_energy(&mut reg);
    register_power(&mut reg);
    register_frequency(&mut reg);
    register_area(&mut reg);
    register_volume(&mut reg);
    register_data(&mut reg);
    register_angle(&mut reg);
    register_temperature(&mut reg);
    reg
}

fn register_length(reg: &mut Registry) {
    reg.add_linear("length", "m", 1.0, &[]);
    reg.add_linear("length", "km", 1000.0, &["kilometer", "kilometre", "kilometers", "kilometres", "kms"]);
    reg.add_linear("length", "cm", 0.01, &["centimeter", "centimetre", "centimeters", "centimetres", "cms"]);
    reg.add_linear("length", "mm", 0.001, &["millimeter", "millimetre", "millimeters", "millimetres", "mms"]);
    reg.add_linear("length", "μm", 1e-6, &["um", "micrometer", "micrometre", "micron", "microns"]);
    reg.add_linear("length", "nm", 1e-9, &["nanometer", "nanometre", "nanometers", "nanometres"]);
    reg.add_linear("length", "in", 0.0254, &["inch", "inches", "\""]);
    reg.add_linear("length", "ft", 0.3048, &["foot", "feet", "'"]);
    reg.add_linear("length", "yd", 0.9144, &["yard", "yards"]);
    reg.add_linear("length", "mi", 1609.344, &["mile", "miles"]);
}

fn register_mass(reg: &mut Registry) {
    reg.add_linear("mass", "kg", 1.0, &[]);
    reg.add_linear("mass", "g", 0.001, &["gram", "grams"]);
    reg.add_linear("mass", "mg", 1e-6, &["milligram", "milligrams"]);
    reg.add_linear("mass", "lb", 0.45359237, &["lbs", "pound", "pounds"]);
    reg.add_linear("mass", "oz", 0.028349523125, &["ounce", "ounces"]);
    reg.add_linear("mass", "ton", 1000.0, &["t", "tonne", "tonnes", "metric ton", "metric tons"]);
}

fn register_time(reg: &mut Registry) {
    reg.add_linear("time", "s", 1.0, &[]);
    reg.add_linear("time", "ms", 1e-3, &["millisecond", "milliseconds"]);
    reg.add_linear("time", "μs", 1e-6, &["us", "microsecond", "microseconds"]);
    reg.add_linear("time", "min", 60.0, &["minute", "minutes"]);
    reg.add_linear("time", "h", 3600.0, &["hr", "hour", "hours"]);
    reg.add_linear("time", "day", 86400.0, &["days", "d"]);
}

fn register_speed(reg: &mut Registry) {
    reg.add_linear("speed", "m/s", 1.0, &["mps", "meter/second", "metre/second", "meters/second", "metres/second"]);
    reg.add_linear("speed", "km/h", 1000.0 / 3600.0, &["kph", "kmph", "kilometer/hour", "kilometre/hour"]);
    reg.add_linear("speed", "mph", 1609.344 / 3600.0, &["mile/hour", "miles/hour"]);
    reg.add_linear("speed", "ft/s", 0.3048, &["fps", "foot/second", "feet/second", "ftps"]);
    reg.add_linear("speed", "kn", 1852.0 / 3600.0, &["knot", "knots"]);
}

fn register_pressure(reg: &mut Registry) {
    reg.add_linear("pressure", "Pa", 1.0, &[]);
    reg.add_linear("pressure", "kPa", 1000.0, &[]);
    reg.add_linear("pressure", "bar", 1e5, &[]);
    reg.add_linear("pressure", "mbar", 100.0, &["millibar", "hPa"]);
    reg.add_linear("pressure", "atm", 101325.0, &[]);
    reg.add_linear("pressure", "psi", 6894.757293168, &["pound-force/in^2", "lb/in^2"]);
}

fn register_energy(reg: &mut Registry) {
    reg.add_linear("energy", "J", 1.0, &[]);
    reg.add_linear("energy", "kJ", 1000.0, &[]);
    reg.add_linear("energy", "Wh", 3600.0, &["watt-hour", "watt hour"]);
    reg.add_linear("energy", "kWh", 3.6e6, &["kilowatt-hour", "kilowatt hour"]);
    reg.add_linear("energy", "cal", 4.184, &["small calorie", "calorie"]);
    reg.add_linear("energy", "kcal", 4184.0, &["Cal", "food calorie"]);
    reg.add_linear("energy", "eV", 1.602176634e-19, &[]);
}

fn register_power(reg: &mut Registry) {
    reg.add_linear("power", "W", 1.0, &[]);
    reg.add_linear("power", "kW", 1000.0, &[]);
    reg.add_linear("power", "MW", 1e6, &[]);
    reg.add_linear("power", "hp", 745.6998715822702, &["horsepower"]);
}

fn register_frequency(reg: &mut Registry) {
    reg.add_linear("frequency", "Hz", 1.0, &[]);
    reg.add_linear("frequency", "kHz", 1e3, &[]);
    reg.add_linear("frequency", "MHz", 1e6, &[]);
    reg.add_linear("frequency", "GHz", 1e9, &[]);
    reg.add_linear("frequency", "rpm", 1.0 / 60.0, &[]);
}

fn register_area(reg: &mut Registry) {
    reg.add_linear("area", "m^2", 1.0, &[]);
    reg.add_linear("area", "cm^2", 1e-4, &[]);
    reg.add_linear("area", "mm^2", 1e-6, &[]);
    reg.add_linear("area", "km^2", 1e6, &[]);
    reg.add_linear("area", "in^2", 0.00064516, &[]);
    reg.add_linear("area", "ft^2", 0.09290304, &[]);
    reg.add_linear("area", "yd^2", 0.83612736, &[]);
    reg.add_linear("area", "acre", 4046.8564224, &[]);
    reg.add_linear("area", "hectare", 10000.0, &["ha"]);
}

fn register_volume(reg: &mut Registry) {
    reg.add_linear("volume", "m^3", 1.0, &[]);
    reg.add_linear("volume", "L", 0.001, &["liter", "litre", "liters", "litres"]);
    reg.add_linear("volume", "mL", 1e-6, &["ml", "milliliter", "millilitre"]);
    reg.add_linear("volume", "cm^3", 1e-6, &["cc", "cubic centimeter", "cubic centimetre"]);
    reg.add_linear("volume", "in^3", 1.6387064e-5, &["cu in"]);
    reg.add_linear("volume", "ft^3", 0.028316846592, &["cu ft"]);
    reg.add_linear("volume", "gal", 0.003785411784, &["gallon", "gallons", "US gal"]);
    reg.add_linear("volume", "qt", 0.000946352946, &["quart", "quarts"]);
    reg.add_linear("volume", "pt", 0.000473176473, &["pint", "pints"]);
    reg.add_linear("volume", "fl oz", 2.95735295625e-5, &["fluid ounce", "fl. oz."]);
}

fn register_data(reg: &mut Registry) {
    let kib = 1024.0;
    reg.add_linear("data", "B", 1.0, &[]);
    reg.add_linear("data", "KB", kib, &[]);
    reg.add_linear("data", "MB", kib * kib, &[]);
    reg.add_linear("data", "GB", kib * kib * kib, &[]);
    reg.add_linear("data", "TB", kib * kib * kib * kib, &[]);
    reg.add_linear("data", "bit", 1.0 / 8.0, &["b"]);
    reg.add_linear("data", "Kb", kib / 8.0, &[]);
    reg.add_linear("data", "Mb", kib * kib / 8.0, &[]);
    reg.add_linear("data", "Gb", kib * kib * kib / 8.0, &[]);
    reg.add_linear("data", "Tb", kib * kib * kib * kib / 8.0, &[]);
}

fn register_angle(reg: &mut Registry) {
    reg.add_linear("angle", "rad", 1.0, &["radian", "radians"]);
    reg.add_linear("angle", "deg", PI / 180.0, &["degree", "degrees"]);
    reg.add_linear("angle", "grad", PI / 200.0, &["gon", "grade"]);
    reg.add_linear("angle", "turn", 2.0 * PI, &["rev", "revolution"]);
}

fn celsius_to_kelvin(x: f64) -> f64 {
    x + 273.15
}

fn kelvin_to_celsius(x: f64) -> f64 {
    x - 273.15
}

fn fahrenheit_to_kelvin(x: f64) -> f64 {
    (x - 32.0) * 5.0 / 9.0 + 273.15
}

fn kelvin_to_fahrenheit(x: f64) -> f64 {
    (x - 273.15) * 9.0 / 5.0 + 32.0
}

fn rankine_to_kelvin(x: f64) -> f64 {
    x * 5.0 / 9.0
}

fn kelvin_to_rankine(x: f64) -> f64 {
    x * 9.0 / 5.0
}

fn identity(x: f64) -> f64 {
    x
}

fn register_temperature(reg: &mut Registry) {
    reg.add_custom("temperature", "K", identity, identity, &["kelvin", "kelvins", "k"]);
    reg.add_custom("temperature", "C", celsius_to_kelvin, kelvin_to_celsius, &["°C", "celsius", "degC"]);
    reg.add_custom("temperature", "F", fahrenheit_to_kelvin, kelvin_to_fahrenheit, &["°F", "fahrenheit", "degF"]);
    reg.add_custom("temperature", "R", rankine_to_kelvin, kelvin_to_rankine, &["rankine", "°R"]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Transform;

    #[test]
    fn test_all_categories_present() {
        let reg = default_registry();
        assert_eq!(
            reg.list_categories(),
            vec![
                "angle", "area", "data", "energy", "frequency", "length", "mass",
                "power", "pressure", "speed", "temperature", "time", "volume",
            ]
        );
    }

    #[test]
    fn test_spot_factors() {
        let reg = default_registry();
        let factor = |cat: &str, key: &str| match reg.get(cat, key).map(|u| u.transform) {
            Some(Transform::Linear { factor, .. }) => factor,
            other => panic!("expected linear unit for {cat}/{key}, got {other:?}"),
        };
        assert_eq!(factor("length", "ft"), 0.3048);
        assert_eq!(factor("mass", "lb"), 0.45359237);
        assert_eq!(factor("speed", "km/h"), 1000.0 / 3600.0);
        assert_eq!(factor("pressure", "psi"), 6894.757293168);
        assert_eq!(factor("energy", "eV"), 1.602176634e-19);
        assert_eq!(factor("data", "KB"), 1024.0);
        assert_eq!(factor("angle", "deg"), PI / 180.0);
    }

    #[test]
    fn test_base_units_are_identity() {
        let reg = default_registry();
        for (cat, base) in [
            ("length", "m"),
            ("mass", "kg"),
            ("time", "s"),
            ("speed", "m/s"),
            ("pressure", "Pa"),
            ("energy", "J"),
            ("power", "W"),
            ("frequency", "Hz"),
            ("area", "m^2"),
            ("volume", "m^3"),
            ("data", "B"),
            ("angle", "rad"),
        ] {
            let unit = reg.get(cat, base).unwrap();
            assert!(unit.is_base(), "{cat}/{base} should be the base unit");
        }
    }

    #[test]
    fn test_roundtrip_every_unit() {
        // to_base and from_base must be inverses at relative tolerance 1e-9
        let reg = default_registry();
        for cat in reg.list_categories() {
            for name in reg.list_units(cat) {
                let unit = reg.get(cat, name).unwrap();
                for x in [0.0, -3.5, 1.0, 12345.678, 1e9] {
                    let back = unit.from_base(unit.to_base(x));
                    assert!(
                        (back - x).abs() <= 1e-9 * x.abs().max(1.0),
                        "roundtrip failed for {cat}/{name} at {x}: got {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_temperature_transforms() {
        let reg = default_registry();
        let f = reg.get("temperature", "F").unwrap();
        let c = reg.get("temperature", "C").unwrap();
        let r = reg.get("temperature", "rankine").unwrap();

        assert_eq!(f.to_base(32.0), 273.15);
        assert_eq!(c.from_base(273.15), 0.0);
        assert!((r.to_base(9.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_plural_and_word_aliases() {
        let reg = default_registry();
        assert_eq!(reg.get("length", "kilometers").map(|u| u.name.as_str()), Some("km"));
        assert_eq!(reg.get("mass", "pounds").map(|u| u.name.as_str()), Some("lb"));
        assert_eq!(reg.get("speed", "kph").map(|u| u.name.as_str()), Some("km/h"));
        assert_eq!(reg.get("volume", "fluid ounce").map(|u| u.name.as_str()), Some("fl oz"));
        assert_eq!(reg.get("temperature", "°c").map(|u| u.name.as_str()), Some("C"));
    }

    #[test]
    fn test_data_alias_overwrites() {
        // "b" was first the byte base key, then reclaimed by bit; the
        // case-folded "kb" key likewise lands on the later kilobit unit.
        let reg = default_registry();
        assert_eq!(reg.get("data", "b").map(|u| u.name.as_str()), Some("bit"));
        assert_eq!(reg.get("data", "kb").map(|u| u.name.as_str()), Some("Kb"));
        // Both canonical names stay listed
        let units = reg.list_units("data");
        assert!(units.contains(&"KB"));
        assert!(units.contains(&"Kb"));
    }

    #[test]
    fn test_energy_cal_alias_overwrite() {
        // kcal registers the alias "Cal", which case-folds onto "cal"
        let reg = default_registry();
        assert_eq!(reg.get("energy", "cal").map(|u| u.name.as_str()), Some("kcal"));
    }

    #[test]
    fn test_detect_category_on_seed_data() {
        let reg = default_registry();
        assert_eq!(reg.detect_category("ft", "cm"), Some("length"));
        assert_eq!(reg.detect_category("kph", "mph"), Some("speed"));
        assert_eq!(reg.detect_category("m", "kg"), None);
    }
}
