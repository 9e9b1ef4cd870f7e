/// Implements the probe, predicate, conversion and [`Alternative`][crate::Alternative]
/// impls for an alternative whose payload is `Copy`.
macro_rules! copy_alternative {
    ($variant:ident($ty:ty)) => {
        paste::paste! {
            impl Value<'_> {
                #[inline]
                pub fn [<is_ $variant:snake>](&self) -> bool {
                    matches!(self, Self::$variant(_))
                }

                #[inline]
                pub fn [<$variant:snake>](&self) -> Option<$ty> {
                    match self {
                        Self::$variant(v) => Some(*v),
                        _ => None,
                    }
                }
            }

            impl<'v> Alternative<'v> for $ty {
                const KIND: Kind = Kind::$variant;

                #[inline]
                fn try_from_value(value: &'v Value<'_>) -> Option<Self> {
                    value.[<$variant:snake>]()
                }
            }

            impl From<$ty> for Value<'_> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        }
    };
}
