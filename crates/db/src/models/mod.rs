//! Row models, one per fixed query.

pub mod department;
pub mod dept_goods_sale;
