use serde::Deserialize;

// 关联创建请求（ano 缺省为当前年份）
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssociacaoRequest {
    #[serde(default)]
    pub professor_id: Option<i64>,
    pub disciplina_id: i64,
    #[serde(default)]
    pub turma_id: Option<i64>,
    #[serde(default)]
    pub ano: Option<i32>,
}

// 关联列表查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct AssociacaoListQuery {
    pub professor_id: Option<i64>,
}
