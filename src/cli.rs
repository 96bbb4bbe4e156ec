use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::api::CustomizationKind;

#[derive(Parser, Debug)]
#[command(name = "customizations")]
#[command(version)]
#[command(about = "Manage delivery and payment customizations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// 저장소 JSON 파일 경로. 미지정시 설정 파일의 store_path 사용
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// API 백엔드 (memory, file). 미지정시 설정 파일의 backend 사용
    #[arg(long, global = true)]
    pub backend: Option<String>,

    /// 확인 없이 바로 실행
    #[arg(short = 'y', long, global = true)]
    pub yes: bool,

    /// 디버그 모드
    #[arg(short = 'd', long, global = true)]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// 커스터마이제이션 목록
    List {
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// 결제 수단 숨김 커스터마이제이션 생성
    NewPayment {
        #[arg(long)]
        payment_method: Option<String>,

        #[arg(long)]
        cart_subtotal: Option<String>,
    },

    /// 결제 커스터마이제이션 수정
    EditPayment {
        id: String,

        #[arg(long)]
        payment_method: Option<String>,

        #[arg(long)]
        cart_subtotal: Option<String>,
    },

    /// 결제 커스터마이제이션 삭제 (편집 페이지의 Delete)
    DeletePayment { id: String },

    /// 배송 옵션 숨김 (기본값: Express)
    HideDelivery {
        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        delivery_option_name: Option<String>,
    },

    /// 배송 옵션 이름 변경
    RenameDelivery {
        /// 미지정시 설정 파일의 delivery_function_id 사용
        #[arg(long)]
        function_id: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        delivery_option_name: Option<String>,

        #[arg(long)]
        rename_to: Option<String>,
    },

    /// 여러 커스터마이제이션 일괄 삭제
    Delete {
        #[arg(required_unless_present = "all")]
        ids: Vec<String>,

        /// 목록 전체 선택
        #[arg(long)]
        all: bool,
    },

    /// 기본 설정 파일 생성
    InitConfig,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Payment,
    Delivery,
}

impl From<KindArg> for CustomizationKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Payment => CustomizationKind::Payment,
            KindArg::Delivery => CustomizationKind::Delivery,
        }
    }
}
