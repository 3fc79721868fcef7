use diesel::prelude::*;

#[derive(Insertable)]
#[diesel(table_name = crate::schema::plano_produto)]
pub struct NewPlanoProduto {
    pub plano_id: i32,
    pub produto_id: i32,
}

impl NewPlanoProduto {
    pub fn new(plano_id: i32, produto_id: i32) -> Self {
        Self {
            plano_id,
            produto_id,
        }
    }
}
