//! Host classification of base stacks into fuels and brewing reagents.

use crate::error::ClassifyError;

/// Host predicates over the base stack type
///
/// Either call may fail when the host cannot answer for a particular
/// stack. The registry logs such failures and counts the stack as "no".
pub trait StackClassifier<S> {
    fn is_fuel(&self, stack: &S) -> Result<bool, ClassifyError>;
    fn is_reagent(&self, stack: &S) -> Result<bool, ClassifyError>;
}

/// Classifier assembled from two closures
pub struct FnClassifier<F, R> {
    fuel: F,
    reagent: R,
}

impl<F, R> FnClassifier<F, R> {
    pub fn new<S>(fuel: F, reagent: R) -> Self
    where
        F: Fn(&S) -> Result<bool, ClassifyError>,
        R: Fn(&S) -> Result<bool, ClassifyError>,
    {
        Self { fuel, reagent }
    }
}

impl<S, F, R> StackClassifier<S> for FnClassifier<F, R>
where
    F: Fn(&S) -> Result<bool, ClassifyError>,
    R: Fn(&S) -> Result<bool, ClassifyError>,
{
    fn is_fuel(&self, stack: &S) -> Result<bool, ClassifyError> {
        (self.fuel)(stack)
    }

    fn is_reagent(&self, stack: &S) -> Result<bool, ClassifyError> {
        (self.reagent)(stack)
    }
}

/// Classifier that puts nothing in either set
#[derive(Debug, Clone, Copy, Default)]
pub struct NoClassification;

impl<S> StackClassifier<S> for NoClassification {
    fn is_fuel(&self, _stack: &S) -> Result<bool, ClassifyError> {
        Ok(false)
    }

    fn is_reagent(&self, _stack: &S) -> Result<bool, ClassifyError> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_classifier_delegates() {
        let classifier = FnClassifier::new(
            |n: &i32| Ok(*n > 10),
            |n: &i32| {
                if *n < 0 {
                    Err(ClassifyError::new("negative"))
                } else {
                    Ok(n % 2 == 0)
                }
            },
        );

        assert_eq!(classifier.is_fuel(&11), Ok(true));
        assert_eq!(classifier.is_fuel(&3), Ok(false));
        assert_eq!(classifier.is_reagent(&4), Ok(true));
        assert_eq!(
            classifier.is_reagent(&-1),
            Err(ClassifyError::new("negative"))
        );
    }

    #[test]
    fn test_no_classification() {
        assert_eq!(NoClassification.is_fuel(&"coal"), Ok(false));
        assert_eq!(NoClassification.is_reagent(&"coal"), Ok(false));
    }
}
