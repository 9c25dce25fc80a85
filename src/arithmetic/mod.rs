//! digit-level arithmetic engines

pub(crate) mod addition;
pub(crate) mod multiplication;
pub(crate) mod square;
pub(crate) mod pow;
pub(crate) mod division;
pub(crate) mod modulo;
