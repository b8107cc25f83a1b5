//! Named component fields for vectors with up to 4 elements.
//!
//! `Vector<T, N>` dereferences to a `#[repr(C)]` struct whose fields alias its elements, and that
//! struct dereferences to the next naming group: `xyzw`, then `rgba`, then `stpq`. All three name
//! the same memory, so `v.x`, `v.r` and `v.s` are one and the same place.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

macro_rules! members {
    ($(
        $src:ty => $name:ident { $($field:ident),+ }
    ),+ $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name<T> {
                $( pub $field: T, )+
                _priv: (), // prevent external construction
            }

            impl<T> Deref for $src {
                type Target = $name<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    unsafe { mem::transmute::<&Self, &Self::Target>(self) }
                }
            }

            impl<T> DerefMut for $src {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    unsafe { mem::transmute::<&mut Self, &mut Self::Target>(self) }
                }
            }
        )+
    };
}

members! {
    Vector<T, 1> => X { x },
    Vector<T, 2> => XY { x, y },
    Vector<T, 3> => XYZ { x, y, z },
    Vector<T, 4> => XYZW { x, y, z, w },

    X<T> => R { r },
    XY<T> => RG { r, g },
    XYZ<T> => RGB { r, g, b },
    XYZW<T> => RGBA { r, g, b, a },

    R<T> => S { s },
    RG<T> => ST { s, t },
    RGB<T> => STP { s, t, p },
    RGBA<T> => STPQ { s, t, p, q },
}

#[cfg(test)]
mod tests {
    use crate::{vec3, vec4};

    #[test]
    fn aliases_share_storage() {
        let mut v = vec4(1, 2, 3, 4);
        assert_eq!([v.x, v.y, v.z, v.w], [1, 2, 3, 4]);
        assert_eq!([v.r, v.g, v.b, v.a], [1, 2, 3, 4]);
        assert_eq!([v.s, v.t, v.p, v.q], [1, 2, 3, 4]);

        v.p = 30;
        assert_eq!(v.z, 30);
        assert_eq!(v.b, 30);

        let v = vec3(1.0f64, 2.0, 3.0);
        assert!(std::ptr::eq(&v.x, &v.s));
        assert!(std::ptr::eq(&v.z, &v[2]));
    }
}
