pub mod function;
pub mod lower_limb;
pub mod pain;
pub mod spine;
pub mod upper_limb;
