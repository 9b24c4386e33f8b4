use std::io::{self, Write};

use crate::app::AppError;
use crate::category::Category;
use crate::config::Config;
use crate::conversion;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Convert,
    UnitList,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu() -> Result<MenuChoice, AppError> {
    println!("\n=== Unit Converter Toolbox ===");
    println!("1) 단위 변환기");
    println!("2) 단위 목록");
    println!("3) 설정");
    println!("0) 종료");
    loop {
        let sel = read_line("메뉴 선택: ")?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Convert),
            "2" => return Ok(MenuChoice::UnitList),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("잘못된 입력입니다. 다시 선택하세요."),
        }
    }
}

/// 단위 변환 메뉴를 처리한다. 폼의 드롭다운과 같은 목록을 번호로 고른다.
pub fn handle_convert(cfg: &Config) -> Result<(), AppError> {
    println!("\n-- 단위 변환 --");
    let category = select_category(cfg.default_category)?;
    let options = conversion::unit_options(category.name())?;
    print_options(&options);

    let from_default = cfg.default_units.label_for(category);
    let from = select_unit(&options, "입력 단위", from_default)?;
    // 변환 단위 기본값은 입력 단위와 다른 첫 항목
    let to_default = options
        .iter()
        .copied()
        .find(|label| *label != from)
        .unwrap_or(options[0]);
    let to = select_unit(&options, "변환 단위", to_default)?;

    let raw = read_line("값 입력: ")?;
    let line = conversion::convert(raw.trim(), category.name(), &from, &to, cfg.decimals);
    println!("{line}");
    Ok(())
}

/// 카테고리별 단위 목록을 출력한다.
pub fn handle_unit_list() -> Result<(), AppError> {
    println!("\n-- 단위 목록 --");
    for name in conversion::category_options() {
        let units = conversion::unit_options(name)?;
        println!("{name}: {}", units.join(", "));
    }
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(cfg: &mut Config) -> Result<(), AppError> {
    println!("\n-- 설정 --");
    println!("현재 소수 자릿수: {}", cfg.decimals);
    println!("현재 기본 카테고리: {}", cfg.default_category.name());
    let sel = read_line("변경할 항목(1=소수 자릿수, 2=기본 카테고리, 엔터=취소): ")?;
    match sel.trim() {
        "1" => {
            let n = read_line("소수 자릿수(0~8): ")?;
            match n.trim().parse::<u32>() {
                Ok(d) if d <= 8 => {
                    cfg.decimals = d;
                    println!("소수 자릿수가 변경되었습니다: {d}");
                }
                _ => println!("잘못된 입력이므로 변경하지 않습니다."),
            }
        }
        "2" => {
            let cat = select_category(cfg.default_category)?;
            cfg.default_category = cat;
            println!("기본 카테고리가 변경되었습니다: {}", cat.name());
        }
        "" => {}
        _ => println!("잘못된 입력이므로 변경하지 않습니다."),
    }
    Ok(())
}

fn select_category(default: Category) -> Result<Category, AppError> {
    let names = conversion::category_options();
    for (i, name) in names.iter().enumerate() {
        println!("{}) {name}", i + 1);
    }
    loop {
        let sel = read_line(&format!("카테고리 번호(엔터 시 {}): ", default.name()))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= names.len() {
                // 번호는 표시 순서와 같다
                return Ok(Category::ALL[n - 1]);
            }
        }
        println!("지원하지 않는 번호입니다.");
    }
}

/// 단위를 번호 또는 라벨 문자열로 고른다. 빈 입력은 기본값을 택한다.
fn select_unit(
    options: &[&'static str],
    prompt: &str,
    default: &'static str,
) -> Result<String, AppError> {
    let sel = read_line(&format!("{prompt}(번호 또는 라벨, 엔터 시 {default}): "))?;
    let trimmed = sel.trim();
    if trimmed.is_empty() {
        return Ok(default.to_string());
    }
    if let Ok(n) = trimmed.parse::<usize>() {
        if n >= 1 && n <= options.len() {
            return Ok(options[n - 1].to_string());
        }
    }
    // 목록에 없는 문자열은 엔진이 검증해서 메시지로 알려준다
    Ok(trimmed.to_string())
}

fn print_options(options: &[&'static str]) {
    for (i, label) in options.iter().enumerate() {
        println!("{}) {label}", i + 1);
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}
