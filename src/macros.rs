//! macros forwarding operator impls to their borrowed forms

macro_rules! forward_val_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl $imp<$res> for $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to val-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident for $res:ty, $method:ident) => {
        impl<'a> $imp<$res> for &'a $res {
            type Output = $res;

            #[inline]
            fn $method(self, other: $res) -> $res {
                // forward to ref-ref
                $imp::$method(self, &other)
            }
        }
    };
}

macro_rules! forward_communative_binop {
    (impl $trait:ident<$t1:ty>::$method:ident for $t2:ty) => {
        impl $trait<$t1> for $t2 {
            type Output = BigInt;

            #[inline]
            fn $method(self, rhs: $t1) -> Self::Output {
                // swap operands
                $trait::$method(rhs, self)
            }
        }
    };
}
