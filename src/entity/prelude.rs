//! 预导入模块，方便使用

pub use super::admins::{ActiveModel as AdminActiveModel, Entity as Admins, Model as AdminModel};
pub use super::alunos::{ActiveModel as AlunoActiveModel, Entity as Alunos, Model as AlunoModel};
pub use super::disciplina_professores::{
    ActiveModel as DisciplinaProfessorActiveModel, Entity as DisciplinaProfessores,
    Model as DisciplinaProfessorModel,
};
pub use super::disciplinas::{
    ActiveModel as DisciplinaActiveModel, Entity as Disciplinas, Model as DisciplinaModel,
};
pub use super::faltas::{ActiveModel as FaltaActiveModel, Entity as Faltas, Model as FaltaModel};
pub use super::notas::{ActiveModel as NotaActiveModel, Entity as Notas, Model as NotaModel};
pub use super::professores::{
    ActiveModel as ProfessorActiveModel, Entity as Professores, Model as ProfessorModel,
};
pub use super::turmas::{ActiveModel as TurmaActiveModel, Entity as Turmas, Model as TurmaModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
