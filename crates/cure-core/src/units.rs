// cure-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, Ratio as UomRatio,
    ThermodynamicTemperature as UomThermodynamicTemperature, Time as UomTime,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Ratio = UomRatio;
pub type Temperature = UomThermodynamicTemperature;
pub type Time = UomTime;

#[inline]
pub fn mpa(v: f64) -> Pressure {
    use uom::si::pressure::megapascal;
    Pressure::new::<megapascal>(v)
}

#[inline]
pub fn days(v: f64) -> Time {
    use uom::si::time::day;
    Time::new::<day>(v)
}

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn unitless(v: f64) -> Ratio {
    use uom::si::ratio::ratio;
    Ratio::new::<ratio>(v)
}

#[inline]
pub fn in_mpa(p: Pressure) -> f64 {
    use uom::si::pressure::megapascal;
    p.get::<megapascal>()
}

#[inline]
pub fn in_gpa(p: Pressure) -> f64 {
    use uom::si::pressure::gigapascal;
    p.get::<gigapascal>()
}

#[inline]
pub fn in_days(t: Time) -> f64 {
    use uom::si::time::day;
    t.get::<day>()
}

#[inline]
pub fn in_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = mpa(30.0);
        let _t = days(28.0);
        let _c = celsius(20.0);
        let _r = unitless(0.5);
    }

    #[test]
    fn conversions_round_trip() {
        assert!((in_mpa(mpa(38.0)) - 38.0).abs() < 1e-9);
        assert!((in_gpa(mpa(32_558.0)) - 32.558).abs() < 1e-9);
        assert!((in_days(days(7.0)) - 7.0).abs() < 1e-9);
        assert!((in_celsius(celsius(20.0)) - 20.0).abs() < 1e-9);
    }
}
