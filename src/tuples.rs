//! Implements `Interpolate` for tuples of interpolatable values

macro_rules! tuple_impls {
    ($(
        $Tuple:ident {
            $(($idx:tt) -> $T:ident)+
        }
    )+) => {
        $(
            impl<$($T),+> $crate::Interpolate for ($($T,)+) where $($T: $crate::Interpolate,)+ {
                fn barycentric_interpolate(u: $crate::Fixed, ux: &Self,
                                           v: $crate::Fixed, vx: &Self,
                                           w: $crate::Fixed, wx: &Self) -> Self {
                    ($($crate::Interpolate::barycentric_interpolate(u, &ux.$idx,
                                                                    v, &vx.$idx,
                                                                    w, &wx.$idx),)+)
                }

                fn linear_interpolate(t: $crate::Fixed, x1: &Self, x2: &Self) -> Self {
                    ($($crate::Interpolate::linear_interpolate(t, &x1.$idx, &x2.$idx),)+)
                }
            }
        )+
    }
}

tuple_impls! {
    Tuple1 {
        (0) -> A
    }
    Tuple2 {
        (0) -> A
        (1) -> B
    }
    Tuple3 {
        (0) -> A
        (1) -> B
        (2) -> C
    }
    Tuple4 {
        (0) -> A
        (1) -> B
        (2) -> C
        (3) -> D
    }
    Tuple5 {
        (0) -> A
        (1) -> B
        (2) -> C
        (3) -> D
        (4) -> E
    }
    Tuple6 {
        (0) -> A
        (1) -> B
        (2) -> C
        (3) -> D
        (4) -> E
        (5) -> F
    }
}
