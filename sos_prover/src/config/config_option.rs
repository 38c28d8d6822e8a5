use crate::types::err::{self};

/// A configuration value together with its name and the (inclusive) bounds of the value.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    /// Sets the value of the option, if the value is within the bounds of the option.
    pub fn set(&mut self, value: T) -> Result<(), err::ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            log::warn!("Ignored an out of range value for {}", self.name);
            Err(err::ConfigError::OutOfRange(self.name))
        }
    }
}

#[cfg(test)]
mod option_tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let mut option = ConfigOption {
            name: "test",
            min: 1_usize,
            max: 3,
            value: 2,
        };

        assert!(option.set(1).is_ok());
        assert!(option.set(3).is_ok());
        assert_eq!(option.value, 3);

        assert_eq!(option.set(4), Err(err::ConfigError::OutOfRange("test")));
        assert_eq!(option.value, 3);
    }
}
