use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE: &str = "\
data,descricao,categoria,valor,tipo
2024-01-01,Salário,Salário,3000.00,entrada
2024-01-02,Supermercado,Alimentação,-250.50,saida
2024-02-10,Cinema,Lazer,-40.00,saida
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("dados.csv"), SAMPLE).unwrap();
        Self { dir }
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn data(&self) -> PathBuf {
        self.path().join("dados.csv")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("dashboard").unwrap();
        cmd.env("DASHBOARD_CONFIG_DIR", self.path().join("config"))
            .env_remove("RUST_LOG")
            .current_dir(self.path());
        cmd
    }
}

#[test]
fn months_lists_sorted_months() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("months")
        .arg(fx.data())
        .assert()
        .success()
        .stdout("2024-01\n2024-02\n");
}

#[test]
fn summary_for_one_month() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["summary", "-m", "2024-01"])
        .arg(fx.data())
        .assert()
        .success()
        .stdout(predicate::str::contains("R$ 3,000.00"))
        .stdout(predicate::str::contains("R$ 2,749.50"))
        .stdout(predicate::str::contains("Alimentação"))
        .stdout(predicate::str::contains("Cinema").not());
}

#[test]
fn summary_for_empty_month() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["summary", "-m", "2023-12"])
        .arg(fx.data())
        .assert()
        .success()
        .stdout(predicate::str::contains("Não há gastos por categoria."))
        .stdout(predicate::str::contains("Não há gastos registrados."));
}

#[test]
fn table_shows_all_months_by_default() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("table")
        .arg(fx.data())
        .assert()
        .success()
        .stdout(predicate::str::contains("Todos os meses"))
        .stdout(predicate::str::contains("10/02/2024"))
        .stdout(predicate::str::contains("R$ -250.50"));
}

#[test]
fn charts_are_written_as_png() {
    let fx = Fixture::new();
    let out = fx.path().join("graficos");
    fx.cmd()
        .args(["charts", "-o"])
        .arg(&out)
        .arg(fx.data())
        .assert()
        .success()
        .stdout(predicate::str::contains("resumo.png"))
        .stdout(predicate::str::contains("#F8BBD0 Alimentação: R$ 250.50"))
        .stdout(predicate::str::contains("Lazer: R$ 40.00"))
        .stdout(predicate::str::contains("Cinema: R$ 40.00"));

    for stem in ["resumo", "categorias", "gastos"] {
        let bytes = std::fs::read(out.join(format!("{}.png", stem))).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}

#[test]
fn export_csv_uses_default_name() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["export", "csv", "-m", "2024-02"])
        .arg(fx.data())
        .assert()
        .success();

    let written = std::fs::read_to_string(fx.path().join("financeiro_2024-02.csv")).unwrap();
    assert_eq!(
        written,
        "data,descricao,categoria,valor,tipo\n2024-02-10,Cinema,Lazer,-40.00,saida\n"
    );
}

#[test]
fn export_pdf_writes_report() {
    let fx = Fixture::new();
    let out = fx.path().join("relatorio.pdf");
    fx.cmd()
        .args(["export", "pdf", "-o"])
        .arg(&out)
        .arg(fx.data())
        .assert()
        .success()
        .stdout(predicate::str::contains("relatorio.pdf"));

    assert!(std::fs::read(out).unwrap().starts_with(b"%PDF"));
}

#[test]
fn bad_date_fails_with_row_number() {
    let fx = Fixture::new();
    let bad = fx.path().join("ruim.csv");
    std::fs::write(
        &bad,
        "data,descricao,categoria,valor,tipo\n2024-01-01,A,B,10.00,entrada\nontem,C,D,-5.00,saida\n",
    )
    .unwrap();

    fx.cmd()
        .arg("summary")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date on row 2: 'ontem'"));
}

#[test]
fn invalid_month_is_rejected() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["summary", "-m", "2024-13"])
        .arg(fx.data())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

#[test]
fn config_init_creates_file() {
    let fx = Fixture::new();
    fx.cmd().args(["config", "init"]).assert().success();
    assert!(fx.path().join("config").join("config.json").exists());

    fx.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Moeda:"));
}
