use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Menu {
    Table,
    Id,
    Title,
    Description,
    Price,
    ImageUrl,
    Nutrition,
    Features,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Category {
    Table,
    Id,
    Name,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum CategoryMenu {
    Table,
    CategoryId,
    MenuId,
}

#[derive(Iden, Clone)]
pub enum Bundling {
    Table,
    Id,
    Name,
    BundlingType,
    Price,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum BundlingMenu {
    Table,
    Id,
    BundlingId,
    MenuId,
    DayNumber,
    MealDescription,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Banner {
    Table,
    Id,
    Title,
    ImageUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Courier {
    Table,
    Id,
    Name,
    Logo,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum FoodNutrition {
    Table,
    Id,
    FoodName,
    Calories,
    Protein,
    Fat,
    Carbohydrates,
    Sugar,
}

#[derive(Iden, Clone)]
pub enum Address {
    Table,
    Id,
    UserId,
    Label,
    Address,
    Name,
    Notes,
    Phone,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Personalisasi {
    Table,
    Id,
    UserId,
    Diabetes,
    Gerd,
    UricAcid,
    Cholesterol,
    LowCarb,
    HighProtein,
    Vegetarian,
    LowSugar,
    LowCalorie,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Cart {
    Table,
    Id,
    UserId,
    Status,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum CartItem {
    Table,
    Id,
    CartId,
    MenuId,
    BundlingId,
    ImageUrl,
    Name,
    Quantity,
    Price,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Transaction {
    Table,
    Id,
    UserId,
    CartId,
    PaymentId,
    CourierId,
    AddressId,
    Status,
    Amount,
    CreatedAt,
    UpdatedAt,
}
